use crate::parsing::ParseResult;

/// Panics when `result` breaks a structural invariant.
pub fn check(result: &ParseResult) {
    for node in &result.nodes {
        assert!(
            node.from < node.to,
            "empty node range: {:?} {}..{}",
            node.kind,
            node.from,
            node.to
        );
        for mark in &node.marks {
            assert!(
                mark.from < mark.to,
                "empty mark range: {:?} {}..{}",
                mark.kind,
                mark.from,
                mark.to
            );
            assert!(
                mark.from > node.from && mark.to < node.to,
                "mark {:?} {}..{} not inside {:?} {}..{}",
                mark.kind,
                mark.from,
                mark.to,
                node.kind,
                node.from,
                node.to
            );
        }
    }

    // Post-order: a later node overlapping an earlier one must enclose it.
    for (i, child) in result.nodes.iter().enumerate() {
        for parent in &result.nodes[i + 1..] {
            let disjoint = parent.to <= child.from || child.to <= parent.from;
            let encloses = parent.from < child.from && child.to < parent.to;
            assert!(
                disjoint || encloses,
                "nodes out of post-order: {:?} {}..{} listed before {:?} {}..{}",
                child.kind,
                child.from,
                child.to,
                parent.kind,
                parent.from,
                parent.to
            );
        }
    }

    for decoration in &result.decorations {
        assert!(
            decoration.from < decoration.to,
            "empty decoration range: {}..{}",
            decoration.from,
            decoration.to
        );
    }
}
