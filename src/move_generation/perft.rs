//! Perft: exhaustive leaf counting used to validate move generation against
//! published node counts.

use std::sync::Arc;
use std::thread;

use crate::game_state::chess_types::Position;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for child in generator.generate_children(position) {
        perft_recurse(generator, &child, depth - 1, &mut total);
    }
    total
}

/// One worker thread per root child.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &Position,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return perft(generator.as_ref(), position, 0);
    }

    let handles: Vec<_> = generator
        .generate_children(position)
        .into_iter()
        .map(|child| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let mut local = PerftCounts::default();
                perft_recurse(generator.as_ref(), &child, depth - 1, &mut local);
                local
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    if remaining == 0 {
        count_leaf(generator, position, counts);
        return;
    }

    for child in generator.generate_children(position) {
        perft_recurse(generator, &child, remaining - 1, counts);
    }
}

fn count_leaf<G: MoveGenerator + ?Sized>(generator: &G, leaf: &Position, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if let Some(mv) = leaf.last_move() {
        counts.captures += usize::from(mv.is_capture());
        counts.en_passant += usize::from(mv.is_en_passant());
        counts.castles += usize::from(mv.is_castling());
        counts.promotions += usize::from(mv.is_promotion());
    }

    if leaf.is_in_check(leaf.side_to_move()) {
        counts.checks += 1;
        if generator.generate_children(leaf).is_empty() {
            counts.checkmates += 1;
        }
    }
}
