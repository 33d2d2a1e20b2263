//! Parse-node chain shared between the optimizer and the emitter.
//!
//! Each [`Node`] is a candidate parse of the input up to `index`: `bits` is
//! its accumulated cost, `offset` identifies the token that produced it
//! (`0` for a literal run, otherwise a back-offset), and `chain` links to
//! the node it extends. Chains only ever point to strictly earlier
//! positions, so there are no reference cycles; nodes reachable only from
//! overwritten table slots are freed as soon as their last `Arc` drops.

use std::sync::Arc;

/// Offset the decoder assumes before any match has been seen.
pub const INITIAL_OFFSET: usize = 1;

/// One candidate parse ending at `index`.
#[derive(Debug)]
pub struct Node {
    /// Total emitted bit cost of the parse ending at this node.
    pub bits: u64,
    /// Input position this node covers, inclusive. The sentinel uses
    /// `skip as i64 - 1`, hence a signed type.
    pub index: i64,
    /// `0` for a literal token, otherwise the match's back-offset.
    pub offset: usize,
    /// Predecessor node, or `None` for the sentinel.
    pub chain: Option<Arc<Node>>,
}

impl Node {
    /// The fake node the parser starts from: zero cost, offset fixed at
    /// [`INITIAL_OFFSET`], positioned one byte before the first parsed byte.
    pub fn sentinel(skip: usize) -> Arc<Node> {
        Arc::new(Node {
            bits: 0,
            index: skip as i64 - 1,
            offset: INITIAL_OFFSET,
            chain: None,
        })
    }

    /// Builds a new node extending `chain`.
    pub fn child(bits: u64, index: i64, offset: usize, chain: &Arc<Node>) -> Arc<Node> {
        Arc::new(Node {
            bits,
            index,
            offset,
            chain: Some(Arc::clone(chain)),
        })
    }

    /// Walks the chain from `terminal` back to the sentinel and returns the
    /// tokens in forward emission order (sentinel excluded).
    ///
    /// Implementations may collect tokens into an ordered sequence rather
    /// than mutate the chain's links in place; both are semantically
    /// equivalent, and collecting avoids any unsafe link-reversal.
    pub fn unchain(terminal: &Arc<Node>) -> Vec<Arc<Node>> {
        let mut tokens = Vec::new();
        let mut cur = Arc::clone(terminal);
        loop {
            let pred = cur.chain.clone();
            tokens.push(Arc::clone(&cur));
            match pred {
                Some(next) => cur = next,
                None => break,
            }
        }
        tokens.pop(); // drop the sentinel itself
        tokens.reverse();
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchain_excludes_sentinel_and_restores_forward_order() {
        let sentinel = Node::sentinel(0);
        let a = Node::child(10, 0, 0, &sentinel);
        let b = Node::child(20, 1, 0, &a);
        let c = Node::child(30, 2, 5, &b);

        let tokens = Node::unchain(&c);
        let indices: Vec<i64> = tokens.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn sentinel_index_is_skip_minus_one() {
        let sentinel = Node::sentinel(5);
        assert_eq!(sentinel.index, 4);
        assert_eq!(sentinel.offset, INITIAL_OFFSET);
        assert_eq!(sentinel.bits, 0);
    }
}
