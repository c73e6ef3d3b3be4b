// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Future cards dispatcher.
use log::info;
use std::{sync::mpsc, thread, time::Instant};
use thiserror::Error;

use outs_cards::{Card, CardSet, DeckPool};

use crate::{
    Combinations, HandHistogram, num_combinations,
    spread::{SPREAD_SIZE, SpreadWorker, WorkerMessage},
};

/// The number of hole cards.
pub const HOLE_SIZE: usize = 2;

/// The valid board sizes, pre-flop, flop, turn and river.
pub const BOARD_SIZES: [usize; 4] = [0, 3, 4, 5];

/// Odds calculation errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OddsError {
    /// The number of hole cards is not 2.
    #[error("illegal hole length, expected 2 cards but you gave {0}")]
    HoleSize(usize),
    /// The number of board cards is not 0, 3, 4 or 5.
    #[error("illegal board length, expected 0, 3, 4 or 5 cards but you gave {0}")]
    BoardSize(usize),
    /// A card has been given more than once.
    #[error("the card {0} appears more than once")]
    DuplicateCard(Card),
    /// The configuration has no workers.
    #[error("the number of workers must be greater than zero")]
    NoWorkers,
    /// A worker terminated before sending its results.
    #[error("worker {0} terminated unexpectedly")]
    WorkerDisconnected(usize),
}

/// Dispatcher configuration.
#[derive(Debug, Clone, Copy)]
pub struct OddsConfig {
    /// The number of worker threads.
    pub workers: usize,
    /// The number of cards that can be queued on a worker channel.
    pub queue_size: usize,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            workers: 3,
            queue_size: 64,
        }
    }
}

/// Computes the hand categories distribution for all the possible ways the
/// board can be completed.
///
/// ```
/// # use outs_eval::{CardSet, HandRank, OddsCalculator, OddsConfig};
/// let hole: CardSet = "AS KS".parse().unwrap();
/// let board: CardSet = "QS JS 2D 3C".parse().unwrap();
///
/// let calc = OddsCalculator::new(&hole, &board, OddsConfig::default()).unwrap();
/// let histogram = calc.run().unwrap();
/// assert_eq!(histogram.total(), 46);
/// assert_eq!(histogram.count(HandRank::StraightFlush), 1);
/// ```
#[derive(Debug)]
pub struct OddsCalculator {
    fixed: CardSet,
    config: OddsConfig,
}

impl OddsCalculator {
    /// Creates a calculator for the given hole and board cards.
    pub fn new(hole: &CardSet, board: &CardSet, config: OddsConfig) -> Result<Self, OddsError> {
        if hole.len() != HOLE_SIZE {
            return Err(OddsError::HoleSize(hole.len()));
        }

        if !BOARD_SIZES.contains(&board.len()) {
            return Err(OddsError::BoardSize(board.len()));
        }

        if config.workers == 0 {
            return Err(OddsError::NoWorkers);
        }

        let mut fixed = board.clone();
        fixed.extend(hole.iter().copied());
        if let Some(card) = fixed.find_duplicate() {
            return Err(OddsError::DuplicateCard(card));
        }

        Ok(Self { fixed, config })
    }

    /// The number of cards needed to complete the board.
    pub fn num_future_cards(&self) -> usize {
        SPREAD_SIZE - self.fixed.len()
    }

    /// The number of spreads that will be evaluated.
    pub fn num_spreads(&self) -> usize {
        num_combinations(DeckPool::SIZE - self.fixed.len(), self.num_future_cards())
    }

    /// Evaluates all the spreads and returns the merged workers results.
    pub fn run(&self) -> Result<HandHistogram, OddsError> {
        let num_future = self.num_future_cards();
        if num_future == 0 {
            info!("Evaluating the river spread");
            let mut worker = SpreadWorker::new(&self.fixed);
            worker.evaluate();
            return Ok(worker.into_histogram());
        }

        let mut pool = DeckPool::full();
        for &card in &self.fixed {
            pool.withdraw(card);
        }

        let future = pool.remaining();

        info!(
            "Dispatching {} combinations of {num_future} cards from {} to {} workers",
            self.num_spreads(),
            future.len(),
            self.config.workers
        );

        let now = Instant::now();
        let histogram = thread::scope(|s| -> Result<HandHistogram, OddsError> {
            let workers = (0..self.config.workers)
                .map(|id| {
                    let (tx, rx) = mpsc::sync_channel(self.config.queue_size);
                    let (done_tx, done_rx) = mpsc::sync_channel(1);

                    let worker = SpreadWorker::new(&self.fixed);
                    s.spawn(move || worker.run(id, rx, done_tx));

                    (tx, done_rx)
                })
                .collect::<Vec<_>>();

            let mut comb = Combinations::new(future.len(), num_future);
            let mut subset = Vec::with_capacity(num_future);
            let mut next_worker = 0;

            loop {
                comb.current_into(&mut subset);

                // All the cards of a combination go to the same worker.
                let (tx, _) = &workers[next_worker];
                for &idx in &subset {
                    tx.send(WorkerMessage::Card(future[idx]))
                        .map_err(|_| OddsError::WorkerDisconnected(next_worker))?;
                }

                next_worker += 1;
                if next_worker >= workers.len() {
                    next_worker = 0;
                }

                if !comb.advance() {
                    break;
                }
            }

            for (id, (tx, _)) in workers.iter().enumerate() {
                tx.send(WorkerMessage::Shutdown)
                    .map_err(|_| OddsError::WorkerDisconnected(id))?;
            }

            let mut histogram = HandHistogram::default();
            for (id, (_, done_rx)) in workers.iter().enumerate() {
                let h = done_rx
                    .recv()
                    .map_err(|_| OddsError::WorkerDisconnected(id))?;
                histogram.merge(&h);
            }

            Ok(histogram)
        })?;

        info!(
            "Evaluated {} spreads in {:.3}s",
            histogram.total(),
            now.elapsed().as_secs_f64()
        );

        Ok(histogram)
    }
}
