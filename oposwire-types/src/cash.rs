//! Cash count entries for coin and bill acceptors

use std::fmt;

/// Whether a cash count entry refers to coins or bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashCountKind {
    Coin,
    Bill,
}

/// One denomination slot in a cash-count table
///
/// `nominal` is the face value in the device's smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashCount {
    pub kind: CashCountKind,
    pub nominal: u32,
    pub count: u32,
}

impl CashCount {
    pub fn coin(nominal: u32, count: u32) -> Self {
        Self {
            kind: CashCountKind::Coin,
            nominal,
            count,
        }
    }

    pub fn bill(nominal: u32, count: u32) -> Self {
        Self {
            kind: CashCountKind::Bill,
            nominal,
            count,
        }
    }
}

impl fmt::Display for CashCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.nominal, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constructors() {
        let coin = CashCount::coin(50, 12);
        assert_eq!(coin.kind, CashCountKind::Coin);
        assert_eq!(coin.nominal, 50);
        assert_eq!(coin.count, 12);

        let bill = CashCount::bill(1000, 3);
        assert_eq!(bill.kind, CashCountKind::Bill);
    }

    #[test]
    fn test_display() {
        assert_eq!(CashCount::coin(50, 12).to_string(), "50:12");
    }
}
