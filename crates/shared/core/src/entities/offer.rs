use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::{CaptainRole, Money, PlayerId, TeamId};

/// Unique identifier for a private offer
pub type OfferId = Uuid;

/// A public listing. Advisory only: nothing matches it automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicOffer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub seller: TeamId,
    pub price: Money,
    /// Informational flag set by the seller
    #[serde(default)]
    pub locked: bool,
}

/// A bilateral offer sitting in a recipient's inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateOffer {
    pub id: OfferId,
    pub player_name: String,
    pub seller_role: CaptainRole,
    pub price: Money,
}

impl PrivateOffer {
    pub fn new(
        player_name: impl Into<String>,
        seller_role: impl Into<CaptainRole>,
        price: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_name: player_name.into(),
            seller_role: seller_role.into(),
            price,
        }
    }
}
