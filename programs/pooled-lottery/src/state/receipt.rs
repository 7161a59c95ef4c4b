use anchor_lang::prelude::*;

// 8 discriminator + 8 receipt_id + 32 owner + 8 pool_id + 8 ticket_id + 8 count + 1 bump
pub const RECEIPT_ACCOUNT_SIZE: usize = 8 + 8 + 32 + 8 + 8 + 8 + 1;

/// Record of one purchase. Never modified or closed once written.
#[account]
#[derive(Debug)]
pub struct Receipt {
    pub receipt_id: u64,
    /// Account credited with the tickets and paid if one of them wins.
    pub owner: Pubkey,
    pub pool_id: u64,
    /// First ticket of the contiguous range `[ticket_id, ticket_id + count)`.
    pub ticket_id: u64,
    pub count: u64,
    pub bump: u8,
}

impl Receipt {
    pub fn holds_ticket(&self, ticket: u64) -> bool {
        ticket >= self.ticket_id && ticket - self.ticket_id < self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(ticket_id: u64, count: u64) -> Receipt {
        Receipt {
            receipt_id: 0,
            owner: Pubkey::new_unique(),
            pool_id: 0,
            ticket_id,
            count,
            bump: 254,
        }
    }

    #[test]
    fn account_size_matches_layout() {
        let mut bytes = Vec::new();
        receipt(0, 1).serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len() + 8, RECEIPT_ACCOUNT_SIZE);
    }

    #[test]
    fn range_is_half_open() {
        let receipt = receipt(3, 2);
        assert!(!receipt.holds_ticket(2));
        assert!(receipt.holds_ticket(3));
        assert!(receipt.holds_ticket(4));
        assert!(!receipt.holds_ticket(5));
    }

    #[test]
    fn range_at_top_of_id_space_does_not_overflow() {
        let receipt = receipt(u64::MAX - 1, 5);
        assert!(receipt.holds_ticket(u64::MAX));
        assert!(!receipt.holds_ticket(0));
    }
}
