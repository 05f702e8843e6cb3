//! Remittance fee rules.

use rust_decimal::Decimal;

/// Fee rule applied to quotes.
///
/// A single flat KRW fee is the only rule in effect; a tiered schedule would
/// slot in behind [`fee_for`](Self::fee_for).
#[derive(Debug, Clone)]
pub struct FeePolicy {
    flat_fee: Decimal,
}

impl FeePolicy {
    /// Creates a policy charging a flat KRW fee per transfer.
    #[must_use]
    pub const fn new(flat_fee: Decimal) -> Self {
        Self { flat_fee }
    }

    /// Fee charged for transferring `source_amount` KRW.
    #[must_use]
    pub fn fee_for(&self, _source_amount: Decimal) -> Decimal {
        self.flat_fee
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self::new(Decimal::from(3000))
    }
}
