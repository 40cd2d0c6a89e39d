//! Batch conversion with per-market failure isolation.
//!
//! A market that fails to convert (or validate) is recorded and skipped; it
//! never aborts the rest of the batch. Successes keep their input order.

use tracing::{info, warn};

use super::converter::MarketConverter;
use super::error::DomainError;
use super::market::{CanonicalMarket, RawMarket};
use super::validate::{validate_canonical, validate_raw, ValidationPolicy};

/// A market that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Position of the market in the input.
    pub index: usize,
    /// Market name as received.
    pub market_name: String,
    /// Why the market was skipped.
    pub error: DomainError,
}

/// Outcome of converting a list of markets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    markets: Vec<CanonicalMarket>,
    failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Converted markets in input order.
    #[must_use]
    pub fn markets(&self) -> &[CanonicalMarket] {
        &self.markets
    }

    /// Skipped markets in input order.
    #[must_use]
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    #[must_use]
    pub fn converted(&self) -> usize {
        self.markets.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.converted() + self.failed()
    }

    /// Consume the report, keeping only the converted markets.
    #[must_use]
    pub fn into_markets(self) -> Vec<CanonicalMarket> {
        self.markets
    }

    fn record(&mut self, index: usize, raw: &RawMarket, result: Result<CanonicalMarket, DomainError>) {
        match result {
            Ok(market) => self.markets.push(market),
            Err(error) => {
                warn!(index, market = %raw.name, error = %error, "Skipping market");
                self.failures.push(BatchFailure {
                    index,
                    market_name: raw.name.clone(),
                    error,
                });
            }
        }
    }

    fn log_summary(&self) {
        info!(
            total = self.total(),
            converted = self.converted(),
            failed = self.failed(),
            "Batch conversion finished"
        );
    }
}

/// Convert every market, collecting failures instead of stopping.
#[must_use]
pub fn convert_all(converter: &MarketConverter, raws: &[RawMarket]) -> BatchReport {
    let mut report = BatchReport::default();
    for (index, raw) in raws.iter().enumerate() {
        let result = converter.convert(raw).map_err(DomainError::from);
        report.record(index, raw, result);
    }
    report.log_summary();
    report
}

/// Like [`convert_all`], with the raw pass before and the canonical pass
/// after each conversion.
#[must_use]
pub fn convert_all_validated(
    converter: &MarketConverter,
    policy: &ValidationPolicy,
    raws: &[RawMarket],
) -> BatchReport {
    let mut report = BatchReport::default();
    for (index, raw) in raws.iter().enumerate() {
        let result = convert_validated(converter, policy, raw);
        report.record(index, raw, result);
    }
    report.log_summary();
    report
}

fn convert_validated(
    converter: &MarketConverter,
    policy: &ValidationPolicy,
    raw: &RawMarket,
) -> Result<CanonicalMarket, DomainError> {
    validate_raw(raw, policy)?;
    let market = converter.convert(raw)?;
    validate_canonical(&market, policy)?;
    Ok(market)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ConversionError;
    use crate::domain::validate::ValidationRule;
    use crate::testkit::market::raw_market;
    use rust_decimal_macros::dec;

    fn sample() -> Vec<RawMarket> {
        vec![
            raw_market("1x2", "1", &[("Team A", dec!(1.5)), ("Draw", dec!(3.0))]),
            raw_market("Correct Score", "1", &[("1-0", dec!(7.0))]),
            raw_market("Total", "1", &[("Over 2.5", dec!(1.9)), ("Under 2.5", dec!(1.9))]),
        ]
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let report = convert_all(&MarketConverter::default(), &sample());

        assert_eq!(report.total(), 3);
        assert_eq!(report.converted(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.markets()[0].market_uid().as_str(), "1_1");
        assert_eq!(report.markets()[1].market_uid().as_str(), "1_18_2.5");

        let failure = &report.failures()[0];
        assert_eq!(failure.index, 1);
        assert_eq!(failure.market_name, "Correct Score");
        assert!(matches!(
            failure.error,
            DomainError::Conversion(ConversionError::UnknownMarketType { .. })
        ));
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = convert_all(&MarketConverter::default(), &[]);
        assert_eq!(report.total(), 0);
        assert!(report.into_markets().is_empty());
    }

    #[test]
    fn validation_failures_are_recorded() {
        let mut raws = sample();
        raws[0].outcomes[0].odds = Some(dec!(0.9));

        let report = convert_all_validated(
            &MarketConverter::default(),
            &ValidationPolicy::lenient(),
            &raws,
        );

        assert_eq!(report.converted(), 1);
        assert_eq!(report.failed(), 2);
        match &report.failures()[0].error {
            DomainError::Validation(err) => {
                assert_eq!(err.rule, ValidationRule::OddsNotAboveOne);
                assert_eq!(err.index, Some(0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn strict_policy_rejects_non_numeric_event_ids() {
        let raws = vec![raw_market("Both teams to score", "evt-1", &[("Yes", dec!(1.8))])];
        let converter = MarketConverter::default();

        assert_eq!(convert_all_validated(&converter, &ValidationPolicy::lenient(), &raws).converted(), 1);
        assert_eq!(convert_all_validated(&converter, &ValidationPolicy::strict(), &raws).failed(), 1);
    }
}
