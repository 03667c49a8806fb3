use std::io::Cursor;

use lb_core::{Cutoffs, Level, Player, RankError};
use lb_online::rank_incoming;
use lb_sources::{
    JsonLinesPlayerStream, PlayerStream, SyntheticConfig, SyntheticPlayers, VectorPlayerStream,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rstest::rstest;

fn population(size: usize, seed: u64, distinct: bool) -> Vec<Player> {
    let cfg = SyntheticConfig {
        population: size,
        min_level: 1,
        max_level: if distinct { 10 * size as Level + 1 } else { 300 },
        distinct_levels: distinct,
        seed: Some(seed),
    };
    SyntheticPlayers::new(cfg).unwrap().generate()
}

/// Recomputes every cutoff from scratch by sorting each milestone prefix.
fn brute_force(players: &[Player], interval: usize) -> (Vec<Player>, Cutoffs) {
    let mut cutoffs = Cutoffs::new();
    let mut milestones: Vec<usize> = (1..=players.len() / interval).map(|m| m * interval).collect();
    if players.len() % interval != 0 {
        milestones.push(players.len());
    }
    for milestone in milestones {
        let mut prefix = players[..milestone].to_vec();
        prefix.sort();
        let leaders = &prefix[prefix.len().saturating_sub(interval)..];
        cutoffs.insert(milestone, leaders[0].level);
    }

    let mut all = players.to_vec();
    all.sort();
    let top = all.split_off(all.len().saturating_sub(interval));
    (top, cutoffs)
}

#[rstest]
#[case(0, 5)]
#[case(1, 1)]
#[case(7, 50)]
#[case(50, 50)]
#[case(132, 50)]
#[case(1_000, 1)]
#[case(1_000, 37)]
#[case(2_500, 100)]
fn matches_brute_force(#[case] size: usize, #[case] interval: usize) {
    let players = population(size, size as u64 + interval as u64, false);
    let (expected_top, expected_cutoffs) = brute_force(&players, interval);

    let mut stream = VectorPlayerStream::new(players);
    let result = rank_incoming(&mut stream, interval).unwrap();

    assert_eq!(stream.remaining(), 0);
    assert_eq!(result.top(), expected_top.as_slice());
    assert_eq!(result.cutoffs(), &expected_cutoffs);
    assert_eq!(result.top().len(), interval.min(size));
    if size > 0 {
        assert_eq!(result.cutoffs().keys().max(), Some(&size));
    }
}

#[test]
fn hundred_thirty_two_players_in_intervals_of_fifty() {
    let players = population(132, 4, true);
    let result = rank_incoming(&mut VectorPlayerStream::new(players), 50).unwrap();

    let keys: Vec<usize> = result.cutoffs().keys().copied().collect();
    assert_eq!(keys, vec![50, 100, 132]);
    assert_eq!(result.top().len(), 50);
    assert!(result.top().windows(2).all(|w| w[0].level < w[1].level));
    assert_eq!(result.min_level(), result.cutoffs().get(&132).copied());
}

#[test]
fn empty_stream_has_no_cutoffs() {
    for interval in [1, 10, 50] {
        let result = rank_incoming(&mut VectorPlayerStream::default(), interval).unwrap();
        assert!(result.top().is_empty());
        assert!(result.cutoffs().is_empty());
    }
}

#[rstest]
#[case(99, 10)]
#[case(100, 10)]
#[case(101, 10)]
#[case(5, 10)]
fn cutoff_count_follows_divisibility(#[case] size: usize, #[case] interval: usize) {
    let players = population(size, 11, false);
    let result = rank_incoming(&mut VectorPlayerStream::new(players), interval).unwrap();
    let expected = size / interval + usize::from(size % interval != 0);
    assert_eq!(result.cutoffs().len(), expected);
}

#[test]
fn cutoffs_never_decrease() {
    let players = population(3_000, 5, false);
    let result = rank_incoming(&mut VectorPlayerStream::new(players), 64).unwrap();
    let levels: Vec<Level> = result.cutoffs().values().copied().collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn shuffling_within_batches_keeps_cutoffs() {
    let interval = 25;
    let players = population(640, 8, false);
    let expected = rank_incoming(&mut VectorPlayerStream::new(players.clone()), interval).unwrap();

    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..4 {
        let mut shuffled = players.clone();
        for batch in shuffled.chunks_mut(interval) {
            batch.shuffle(&mut rng);
        }
        let result = rank_incoming(&mut VectorPlayerStream::new(shuffled), interval).unwrap();
        assert_eq!(result.top(), expected.top());
        assert_eq!(result.cutoffs(), expected.cutoffs());
    }
}

#[test]
fn ranks_json_lines_source() {
    let input = (1..=12)
        .map(|l| format!("{{\"name\":\"P{l:02}\",\"level\":{}}}", l * 10))
        .collect::<Vec<_>>()
        .join("\n");
    let mut stream = JsonLinesPlayerStream::from_reader(Cursor::new(input)).unwrap();
    let result = rank_incoming(&mut stream, 5).unwrap();

    let levels: Vec<Level> = result.top().iter().map(|p| p.level).collect();
    assert_eq!(levels, vec![80, 90, 100, 110, 120]);
    assert_eq!(result.cutoffs(), &Cutoffs::from([(5, 10), (10, 60), (12, 80)]));
}

/// Claims more players than it can deliver.
struct Truncated {
    claimed: usize,
}

impl PlayerStream for Truncated {
    fn remaining(&self) -> usize {
        self.claimed
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        Err(RankError::StreamExhausted)
    }
}

#[test]
fn source_errors_surface_to_caller() {
    let err = rank_incoming(&mut Truncated { claimed: 3 }, 2).unwrap_err();
    assert!(matches!(err, RankError::StreamExhausted));
}

/// Takes a while to hand out each player.
struct Sluggish {
    players: VectorPlayerStream,
}

impl PlayerStream for Sluggish {
    fn remaining(&self) -> usize {
        std::thread::sleep(std::time::Duration::from_millis(5));
        self.players.remaining()
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        std::thread::sleep(std::time::Duration::from_millis(10));
        self.players.next_player()
    }
}

#[test]
fn elapsed_excludes_time_spent_in_source() {
    let players = population(4, 6, false);
    let mut stream = Sluggish { players: VectorPlayerStream::new(players) };
    let result = rank_incoming(&mut stream, 2).unwrap();
    assert_eq!(result.top().len(), 2);
    assert!(
        result.elapsed_ms() < 10.0,
        "source time leaked into elapsed: {}ms",
        result.elapsed_ms()
    );
}
