//! Gas price escalation for retried submissions
//!
//! Fee units are indivisible base units, so all scaling is integer
//! multiply-then-divide on `U256`; there is no floating point anywhere in
//! the fee path.

use ethers::types::U256;

/// Computes the offered gas price for each submission attempt
#[derive(Debug, Clone)]
pub struct FeeEscalator {
    /// First offer as a percentage of the node's estimate
    initial_percent: u64,
    /// Scaling applied after each failed attempt
    escalation_percent: u64,
}

impl FeeEscalator {
    pub fn new(initial_percent: u64, escalation_percent: u64) -> Self {
        Self {
            initial_percent,
            escalation_percent,
        }
    }

    /// Offered fee for the first attempt
    pub fn initial_fee(&self, base: U256) -> U256 {
        base * self.initial_percent / 100
    }

    /// Offered fee for the next attempt after a failure
    pub fn escalate(&self, fee: U256) -> U256 {
        fee * self.escalation_percent / 100
    }
}

impl Default for FeeEscalator {
    fn default() -> Self {
        Self::new(125, 110)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalation_sequence_for_base_100() {
        let escalator = FeeEscalator::default();

        let first = escalator.initial_fee(U256::from(100u64));
        assert_eq!(first, U256::from(125u64));

        // Integer truncation: 125 * 110 / 100 = 137, not 137.5
        let second = escalator.escalate(first);
        assert_eq!(second, U256::from(137u64));

        let third = escalator.escalate(second);
        assert_eq!(third, U256::from(150u64));
    }

    #[test]
    fn escalation_is_non_decreasing() {
        let escalator = FeeEscalator::default();
        let mut fee = escalator.initial_fee(U256::from(7u64));

        for _ in 0..10 {
            let next = escalator.escalate(fee);
            assert!(next >= fee);
            fee = next;
        }
    }

    #[test]
    fn large_base_fee_does_not_overflow_or_round() {
        let escalator = FeeEscalator::default();

        // 500 gwei in wei
        let base = U256::from(500_000_000_000u64);
        assert_eq!(escalator.initial_fee(base), U256::from(625_000_000_000u64));
        assert_eq!(
            escalator.escalate(U256::from(625_000_000_000u64)),
            U256::from(687_500_000_000u64)
        );
    }
}
