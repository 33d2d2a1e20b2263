//! Optimal parser: a shortest-path dynamic-programming search over every
//! legal token boundary, returning the terminal [`Node`] of the cheapest
//! parse. The offset range is sharded across worker threads; each shard
//! owns a disjoint slice of the per-offset tables and the reduction across
//! shards is applied deterministically in ascending-offset order so that
//! results do not depend on thread scheduling.

use std::sync::Arc;

use crate::block::{Node, INITIAL_OFFSET};

/// Computes `1 + 2*floor(log2(value))`, the bit length of the interlaced
/// Elias-gamma code for `value`. `value` must be at least 1.
pub fn elias_gamma_bits(value: u64) -> u64 {
    debug_assert!(value >= 1, "elias gamma is undefined for 0");
    1 + 2 * (63 - value.leading_zeros() as u64)
}

/// Largest back-offset legal at position `p` given `offset_limit`: offsets
/// grow with the scan, since a match can never reach before the start of
/// the buffer.
fn offset_ceiling(p: usize, offset_limit: usize) -> usize {
    p.clamp(1, offset_limit.max(1))
}

fn bits_before(pos: i64, skip: usize, sentinel: &Arc<Node>, optimal: &[Option<Arc<Node>>]) -> u64 {
    if pos == skip as i64 - 1 {
        sentinel.bits
    } else {
        optimal[pos as usize]
            .as_ref()
            .expect("optimal prefix missing for a position already scanned")
            .bits
    }
}

fn node_before(pos: i64, skip: usize, sentinel: &Arc<Node>, optimal: &[Option<Arc<Node>>]) -> Arc<Node> {
    if pos == skip as i64 - 1 {
        Arc::clone(sentinel)
    } else {
        Arc::clone(
            optimal[pos as usize]
                .as_ref()
                .expect("optimal prefix missing for a position already scanned"),
        )
    }
}

/// Private per-thread scratch: a contiguous slice `[start, end]` of the
/// offset range, plus the three tables the algorithm threads through it.
struct Shard {
    start: usize,
    end: usize,
    last_literal: Vec<Option<Arc<Node>>>,
    last_match: Vec<Option<Arc<Node>>>,
    match_length: Vec<usize>,
    /// Rolled-out `bestLength[k]` scratch, reset every position.
    best_length: Vec<usize>,
    rolled: usize,
}

impl Shard {
    fn new(start: usize, end: usize) -> Self {
        let len = end.saturating_sub(start) + 1;
        Shard {
            start,
            end,
            last_literal: vec![None; len],
            last_match: vec![None; len],
            match_length: vec![0; len],
            best_length: vec![0; 3],
            rolled: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.start > self.end
    }

    fn seed_initial_offset(&mut self, sentinel: &Arc<Node>) {
        if !self.is_empty() && self.start <= INITIAL_OFFSET && INITIAL_OFFSET <= self.end {
            self.last_match[INITIAL_OFFSET - self.start] = Some(Arc::clone(sentinel));
        }
    }

    /// Returns the length `l` minimizing `optimal[p-l].bits + gamma(l-1)`
    /// for `l` in `2..=k`, amortized across offsets processed at the same
    /// position (the table only grows, never resets mid-position).
    fn best_length_for(
        &mut self,
        k: usize,
        p: i64,
        skip: usize,
        sentinel: &Arc<Node>,
        optimal: &[Option<Arc<Node>>],
    ) -> usize {
        if self.best_length.len() <= k {
            self.best_length.resize(k + 1, 0);
        }
        if self.rolled < 2 {
            self.best_length[2] = 2;
            self.rolled = 2;
        }
        while self.rolled < k {
            let next = self.rolled + 1;
            let incumbent_len = self.best_length[self.rolled];
            let incumbent_bits =
                bits_before(p - incumbent_len as i64, skip, sentinel, optimal) + elias_gamma_bits((incumbent_len - 1) as u64);
            let candidate_bits =
                bits_before(p - next as i64, skip, sentinel, optimal) + elias_gamma_bits((next - 1) as u64);
            self.best_length[next] = if candidate_bits <= incumbent_bits { next } else { incumbent_len };
            self.rolled = next;
        }
        self.best_length[k]
    }

    fn install_match(&mut self, li: usize, index: i64, offset: usize, bits: u64, pred: &Arc<Node>) {
        let should_install = match &self.last_match[li] {
            Some(existing) if existing.index == index => bits < existing.bits,
            _ => true,
        };
        if should_install {
            self.last_match[li] = Some(Node::child(bits, index, offset, pred));
        }
    }

    /// Processes every offset in this shard's slice (clamped to the
    /// position's offset ceiling) at position `p`, returning the cheapest
    /// node this shard observed at `p`, if any.
    fn step(
        &mut self,
        input: &[u8],
        skip: usize,
        p: usize,
        ceiling: usize,
        sentinel: &Arc<Node>,
        optimal: &[Option<Arc<Node>>],
    ) -> Option<Arc<Node>> {
        self.rolled = 1;
        if self.is_empty() {
            return None;
        }
        let hi = ceiling.min(self.end);
        if hi < self.start {
            return None;
        }

        let mut local_best: Option<Arc<Node>> = None;
        for o in self.start..=hi {
            let li = o - self.start;
            let byte_matches = p >= o && input[p] == input[p - o];

            if byte_matches {
                if let Some(ll) = self.last_literal[li].clone() {
                    let len = p as i64 - ll.index;
                    let bits = ll.bits + 1 + elias_gamma_bits(len as u64);
                    self.install_match(li, p as i64, o, bits, &ll);
                }
                self.match_length[li] += 1;
                if self.match_length[li] >= 2 {
                    let k = self.match_length[li];
                    let len = self.best_length_for(k, p as i64, skip, sentinel, optimal);
                    let split = p as i64 - len as i64;
                    let pred = node_before(split, skip, sentinel, optimal);
                    let base_bits = bits_before(split, skip, sentinel, optimal);
                    let msb = (o - 1) / 128 + 1;
                    let bits = base_bits + 8 + elias_gamma_bits(msb as u64) + elias_gamma_bits((len - 1) as u64);
                    self.install_match(li, p as i64, o, bits, &pred);
                }
                if let Some(node) = self.last_match[li].as_ref().filter(|n| n.index == p as i64) {
                    let replace = local_best.as_ref().map_or(true, |b| b.bits > node.bits);
                    if replace {
                        local_best = Some(Arc::clone(node));
                    }
                }
            } else {
                self.match_length[li] = 0;
                if let Some(lm) = self.last_match[li].clone() {
                    let len = p as i64 - lm.index;
                    let bits = lm.bits + 1 + elias_gamma_bits(len as u64) + 8 * len as u64;
                    self.last_literal[li] = Some(Node::child(bits, p as i64, 0, &lm));
                }
                if let Some(node) = self.last_literal[li].as_ref().filter(|n| n.index == p as i64) {
                    let replace = local_best.as_ref().map_or(true, |b| b.bits > node.bits);
                    if replace {
                        local_best = Some(Arc::clone(node));
                    }
                }
            }
        }
        local_best
    }
}

fn partition_offsets(max_offset: usize, threads: usize) -> Vec<(usize, usize)> {
    let threads = threads.max(1);
    let shard_size = (max_offset + threads - 1) / threads;
    let mut shards = Vec::with_capacity(threads);
    let mut start = 1usize;
    for _ in 0..threads {
        if start > max_offset || shard_size == 0 {
            shards.push((1usize, 0usize));
            continue;
        }
        let end = (start + shard_size - 1).min(max_offset);
        shards.push((start, end));
        start = end + 1;
    }
    shards
}

fn reduce_in_order(results: Vec<Option<Arc<Node>>>) -> Option<Arc<Node>> {
    let mut best: Option<Arc<Node>> = None;
    for candidate in results.into_iter().flatten() {
        let replace = best.as_ref().map_or(true, |b| b.bits > candidate.bits);
        if replace {
            best = Some(candidate);
        }
    }
    best
}

/// Runs the optimal parser over `input[skip..]` and returns the terminal
/// node of the cheapest parse. `threads` selects how many shards the
/// offset range is split into; `threads == 1` runs inline with no pool.
/// `verbose` emits a coarse progress line to stderr as the scan advances.
pub fn optimize(input: &[u8], skip: usize, offset_limit: usize, threads: usize, verbose: bool) -> Arc<Node> {
    let n = input.len();
    assert!(skip < n, "optimize requires at least one byte after skip");

    let sentinel = Node::sentinel(skip);
    let mut optimal: Vec<Option<Arc<Node>>> = vec![None; n];

    let threads = threads.max(1);
    let max_offset = offset_limit.min(n.saturating_sub(1)).max(1);
    let bounds = partition_offsets(max_offset, threads);
    let mut shards: Vec<Shard> = bounds.iter().map(|&(s, e)| Shard::new(s, e)).collect();
    for shard in shards.iter_mut() {
        shard.seed_initial_offset(&sentinel);
    }

    let pool = if threads > 1 {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .expect("failed to build optimizer thread pool"),
        )
    } else {
        None
    };

    let total = n - skip;
    for p in skip..n {
        let ceiling = offset_ceiling(p, offset_limit);

        let results: Vec<Option<Arc<Node>>> = if let Some(pool) = &pool {
            pool.install(|| {
                use rayon::prelude::*;
                shards
                    .par_iter_mut()
                    .map(|shard| shard.step(input, skip, p, ceiling, &sentinel, &optimal))
                    .collect()
            })
        } else {
            shards
                .iter_mut()
                .map(|shard| shard.step(input, skip, p, ceiling, &sentinel, &optimal))
                .collect()
        };

        optimal[p] = reduce_in_order(results);

        if verbose && (p - skip) % 8192 == 0 {
            eprint!("\rparsing {:3}%", ((p - skip + 1) * 100 / total.max(1)).min(100));
        }
    }
    if verbose {
        eprintln!("\rparsing 100%");
    }

    optimal[n - 1]
        .clone()
        .expect("optimizer must produce a terminal node for a non-empty input")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elias_gamma_bits_matches_known_values() {
        assert_eq!(elias_gamma_bits(1), 1);
        assert_eq!(elias_gamma_bits(2), 3);
        assert_eq!(elias_gamma_bits(3), 3);
        assert_eq!(elias_gamma_bits(4), 5);
        assert_eq!(elias_gamma_bits(256), 17);
    }

    #[test]
    fn offset_ceiling_grows_with_position_and_clamps_to_limit() {
        assert_eq!(offset_ceiling(0, 32640), 1);
        assert_eq!(offset_ceiling(5, 32640), 5);
        assert_eq!(offset_ceiling(50_000, 32640), 32640);
    }

    #[test]
    fn partition_offsets_covers_the_whole_range_contiguously() {
        let shards = partition_offsets(10, 3);
        assert_eq!(shards, vec![(1, 4), (5, 8), (9, 10)]);
    }

    #[test]
    fn optimize_single_byte_input_is_one_literal() {
        let input = b"A";
        let terminal = optimize(input, 0, 32640, 1, false);
        let tokens = Node::unchain(&terminal);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[0].index, 0);
    }

    #[test]
    fn optimize_is_deterministic_across_thread_counts() {
        let input = b"ABABABABABAB the quick brown fox ABABABABABAB";
        let single = optimize(input, 0, 32640, 1, false);
        let multi = optimize(input, 0, 32640, 4, false);
        assert_eq!(single.bits, multi.bits);
    }
}
