use crate::sink::{IndicatorBoard, OutputSink};
use crate::worker::WorkerId;

#[test]
fn test_non_adjacent_indicators_may_be_lit_together() {
  let board = IndicatorBoard::new(5);
  board.set_indicator(WorkerId::new(0), true);
  board.set_indicator(WorkerId::new(2), true);

  assert_eq!(board.lit_workers(), vec![WorkerId::new(0), WorkerId::new(2)]);
  assert_eq!(board.violations(), 0);
}

#[test]
fn test_adjacent_indicators_count_as_violation_across_the_wrap() {
  let board = IndicatorBoard::new(5);
  board.set_indicator(WorkerId::new(4), true);
  board.set_indicator(WorkerId::new(0), true);
  assert_eq!(board.violations(), 1);

  board.set_indicator(WorkerId::new(0), false);
  board.set_indicator(WorkerId::new(3), true);
  assert_eq!(board.violations(), 2);
  assert_eq!(board.toggles(), 4);
}

#[test]
fn test_fault_darkens_every_indicator() {
  let board = IndicatorBoard::new(3);
  board.set_indicator(WorkerId::new(1), true);
  board.indicate_fault();

  assert!(board.is_faulted());
  assert!(board.lit_workers().is_empty());
  assert!(!board.is_lit(WorkerId::new(1)));
}
