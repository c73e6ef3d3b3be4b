// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.412s
// Hands/sec:       6308155
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use outs_eval::*;

#[rustfmt::skip]
fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let deck = DeckPool::full().remaining();
    let mut counts = HandHistogram::default();
    let mut hand = Vec::with_capacity(Hand::SIZE);

    Combinations::new(deck.len(), Hand::SIZE).for_each(|subset| {
        hand.clear();
        hand.extend(subset.iter().map(|&i| deck[i]));
        counts.increment(Hand::classify(&hand).rank());
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.total();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts.count(HandRank::HighCard));
    println!("One  Pair:       {}", counts.count(HandRank::OnePair));
    println!("Two Pairs:       {}", counts.count(HandRank::TwoPair));
    println!("Three of a Kind: {}", counts.count(HandRank::ThreeOfAKind));
    println!("Straight:        {}", counts.count(HandRank::Straight));
    println!("Flush:           {}", counts.count(HandRank::Flush));
    println!("Full House:      {}", counts.count(HandRank::FullHouse));
    println!("Four of a Kind:  {}", counts.count(HandRank::FourOfAKind));
    println!("Straight Flush:  {}", counts.count(HandRank::StraightFlush));
}
