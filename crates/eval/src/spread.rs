// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand evaluation for a spread of cards.
use log::{debug, warn};
use std::sync::mpsc;

use outs_cards::Card;

use crate::{Hand, HandHistogram};

/// The number of cards in a full spread, two hole cards and five board cards.
pub const SPREAD_SIZE: usize = 7;

/// Messages sent to a worker thread.
#[derive(Debug, Clone, Copy)]
pub enum WorkerMessage {
    /// The next future card.
    Card(Card),
    /// Stop and send back the results.
    Shutdown,
}

/// Collects the best hand categories for spreads made of the fixed cards and
/// future cards received one at a time.
///
/// The fixed cards are never overwritten, once the spread is full the worker
/// finds the best five cards hand, counts its category, and starts filling
/// the future cards slots again.
#[derive(Debug)]
pub struct SpreadWorker {
    spread: Vec<Card>,
    fixed: usize,
    histogram: HandHistogram,
}

impl SpreadWorker {
    /// Creates a worker for the given hole and board cards.
    ///
    /// Panics if there are more than [SPREAD_SIZE] fixed cards.
    pub fn new(fixed: &[Card]) -> Self {
        assert!(
            fixed.len() <= SPREAD_SIZE,
            "too many fixed cards {}",
            fixed.len()
        );

        let mut spread = Vec::with_capacity(SPREAD_SIZE);
        spread.extend_from_slice(fixed);

        Self {
            spread,
            fixed: fixed.len(),
            histogram: HandHistogram::default(),
        }
    }

    /// Adds a future card, evaluates the spread once it is full.
    ///
    /// Panics if the fixed cards already fill the spread.
    pub fn push(&mut self, card: Card) {
        assert!(
            self.spread.len() < SPREAD_SIZE,
            "spread is full, cannot add {card}"
        );

        self.spread.push(card);
        if self.spread.len() == SPREAD_SIZE {
            self.evaluate();
        }
    }

    /// Counts the best hand category for the full spread and clears the
    /// future cards.
    ///
    /// Panics if the spread is not full.
    pub fn evaluate(&mut self) {
        assert_eq!(self.spread.len(), SPREAD_SIZE, "evaluating a partial spread");

        let best = Hand::best_of(&self.spread);
        self.histogram.increment(best.rank());
        self.spread.truncate(self.fixed);
    }

    /// Checks if the worker holds some future cards of an incomplete spread.
    pub fn is_filling(&self) -> bool {
        self.spread.len() > self.fixed
    }

    /// The categories counted so far.
    pub fn histogram(&self) -> &HandHistogram {
        &self.histogram
    }

    /// Consumes this worker and returns its results.
    pub fn into_histogram(self) -> HandHistogram {
        self.histogram
    }

    /// Receives cards until shutdown and sends the results on `done_tx`.
    ///
    /// A disconnected channel is handled as a shutdown.
    pub fn run(
        mut self,
        id: usize,
        rx: mpsc::Receiver<WorkerMessage>,
        done_tx: mpsc::SyncSender<HandHistogram>,
    ) {
        debug!("Worker {id} started");

        while let Ok(WorkerMessage::Card(card)) = rx.recv() {
            self.push(card);
        }

        if self.is_filling() {
            warn!(
                "Worker {id} discarding partial spread {:?}",
                &self.spread[self.fixed..]
            );
        }

        debug!("Worker {id} done with {} spreads", self.histogram.total());

        if done_tx.send(self.into_histogram()).is_err() {
            warn!("Worker {id} results dropped");
        }
    }
}
