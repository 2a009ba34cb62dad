//! DrawBeneficiariesHandler - Command handler for the beneficiary draw.
//!
//! Shuffles the member roster into a uniformly-random payout order and
//! assigns each position to the cycle at the same position. Order and cycle
//! assignments are persisted together. A completed draw is only overwritten
//! when the caller forces it.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::domain::cycle::{draw, Cycle};
use crate::domain::foundation::MemberId;
use crate::ports::{GroupStore, MemberDirectory, StoreError};

/// Command to draw the beneficiary order.
#[derive(Debug, Clone, Default)]
pub struct DrawBeneficiariesCommand {
    /// Overwrite an existing draw.
    pub force: bool,
}

/// Result of a successful draw.
#[derive(Debug, Clone)]
pub struct DrawBeneficiariesResult {
    /// Member ids in payout order.
    pub order: Vec<MemberId>,
    /// Cycles with their beneficiary assignments applied.
    pub cycles: Vec<Cycle>,
}

/// Errors that can occur when drawing beneficiaries.
#[derive(Debug, Clone, Error)]
pub enum DrawBeneficiariesError {
    /// A beneficiary order already exists and `force` was not set.
    #[error("Beneficiary order already drawn; set force to redraw")]
    DrawAlreadyPerformed,

    /// Storage failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Handler for drawing the beneficiary order.
pub struct DrawBeneficiariesHandler {
    store: Arc<dyn GroupStore>,
    members: Arc<dyn MemberDirectory>,
}

impl DrawBeneficiariesHandler {
    pub fn new(store: Arc<dyn GroupStore>, members: Arc<dyn MemberDirectory>) -> Self {
        Self { store, members }
    }

    pub async fn handle(
        &self,
        cmd: DrawBeneficiariesCommand,
    ) -> Result<DrawBeneficiariesResult, DrawBeneficiariesError> {
        let mut rng = StdRng::from_entropy();
        self.handle_with_rng(cmd, &mut rng).await
    }

    /// Runs the draw with a caller-provided source of randomness.
    pub async fn handle_with_rng<R: Rng + Send>(
        &self,
        cmd: DrawBeneficiariesCommand,
        rng: &mut R,
    ) -> Result<DrawBeneficiariesResult, DrawBeneficiariesError> {
        let mut config = self.store.load_config().await?;
        if config.has_draw() && !cmd.force {
            return Err(DrawBeneficiariesError::DrawAlreadyPerformed);
        }

        let member_ids: Vec<MemberId> = self
            .members
            .list()
            .await?
            .iter()
            .map(|m| m.id())
            .collect();
        let mut cycles = self.store.load_cycles().await?;

        let order = draw::draw_order(&member_ids, rng);
        draw::assign_beneficiaries(&mut cycles, &order);

        config.set_beneficiary_order(order.clone());
        self.store.save_rotation(&cycles, &config).await?;

        Ok(DrawBeneficiariesResult { order, cycles })
    }
}
