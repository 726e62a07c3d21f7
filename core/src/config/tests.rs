use std::str::FromStr;
use std::time::Duration;

use rstest::rstest;

use crate::config::{AcquisitionPolicy, Config};
use crate::config_option::ConfigOption;
use crate::error::InitializationError;

#[test]
fn test_default_config() {
  let config = Config::default();
  assert_eq!(config.workers, 5);
  assert_eq!(config.report_capacity, 10);
  assert_eq!(config.eat_duration, Duration::from_millis(250));
  assert_eq!(config.think_duration, config.eat_duration);
  assert_eq!(config.transmit_timeout, Duration::from_millis(100));
  assert_eq!(config.acquisition_policy, AcquisitionPolicy::LookThenAcquire);
  assert!(config.validate().is_ok());
}

#[test]
fn test_options_are_applied_in_order() {
  let mut options = vec![
    ConfigOption::with_workers(7),
    ConfigOption::with_report_capacity(3),
    ConfigOption::with_acquisition_policy(AcquisitionPolicy::OrderedAcquire),
  ];
  options.extend(ConfigOption::with_meal_period(Duration::from_millis(10)));
  options.push(ConfigOption::SetThinkDuration(Duration::from_millis(20)));

  let config = Config::from(options);
  assert_eq!(config.workers, 7);
  assert_eq!(config.report_capacity, 3);
  assert_eq!(config.eat_duration, Duration::from_millis(10));
  assert_eq!(config.think_duration, Duration::from_millis(20));
  assert_eq!(config.acquisition_policy, AcquisitionPolicy::OrderedAcquire);
}

#[rstest]
#[case(ConfigOption::SetWorkers(1), InitializationError::TooFewWorkers(1))]
#[case(ConfigOption::SetWorkers(0), InitializationError::TooFewWorkers(0))]
#[case(ConfigOption::SetReportCapacity(0), InitializationError::ZeroReportCapacity)]
#[case(
  ConfigOption::SetTransmitTimeout(Duration::ZERO),
  InitializationError::ZeroDuration { name: "transmit_timeout", value: Duration::ZERO }
)]
fn test_invalid_configs_are_rejected(#[case] option: ConfigOption, #[case] expected: InitializationError) {
  let config = Config::from([option]);
  assert_eq!(config.validate(), Err(expected));
}

#[rstest]
#[case("look-then-acquire", AcquisitionPolicy::LookThenAcquire)]
#[case("ordered-acquire", AcquisitionPolicy::OrderedAcquire)]
fn test_policy_parses_from_kebab_case(#[case] text: &str, #[case] expected: AcquisitionPolicy) {
  assert_eq!(AcquisitionPolicy::from_str(text).unwrap(), expected);
  assert_eq!(expected.to_string(), text);
}
