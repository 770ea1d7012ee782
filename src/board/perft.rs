use super::{Board, Move};

impl Board {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let info = self.make_generated_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(info);
        }

        nodes
    }

    /// Per-move node counts at `depth`, sorted by move.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let mut counts: Vec<(Move, u64)> = Vec::new();
        if depth == 0 {
            return counts;
        }

        for m in self.generate_legal_moves() {
            let info = self.make_generated_move(m);
            let nodes = self.perft(depth - 1);
            self.unmake_move(info);
            #[cfg(feature = "logging")]
            log::trace!("{m}: {nodes}");
            counts.push((m, nodes));
        }

        counts.sort_by_key(|(m, _)| m.to_uci());
        counts
    }
}
