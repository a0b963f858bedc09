//! Asset lifecycle pipeline — create, mint, amend.
//!
//! A strictly sequential three-stage pipeline against a single signer.
//! Each stage's output is the next stage's required input: the create
//! stage yields the asset-class id and both authority key pairs, the mint
//! stage yields the unit serial, the amend stage rewrites that unit's
//! metadata. A failed stage aborts the run; later stages are reported as
//! skipped, never attempted.
//!
//! Authority keys live exactly as long as one run. The report exposes
//! their public halves only.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::client::HashbridgeClient;
use crate::error::{LedgerError, PairingError, SdkError};
use crate::ledger::{
    AuthorityKey, TokenCreateRequest, TokenMintRequest, TokenType, TokenUpdateNftsRequest,
    TransactionBody, TransactionEnvelope, TransactionSigner, DEFAULT_AUTO_RENEW_PERIOD_SECS,
};
use crate::shared::timeout::bounded;
use crate::shared::{TokenId, TransactionId};

/// Content reference minted into new units.
///
/// A static placeholder: a production caller would supply the unit's real
/// content reference per mint.
pub const UNIT_METADATA_URI: &str = "ipfs://bafkreigg7a4i5kj7dyrqfvlrmcqtj7ya4m4xhdrgbrvbweyauxmtlywrby";

/// Inputs for a full lifecycle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleParams {
    /// Asset-class name.
    pub name: String,
    /// Asset-class symbol.
    pub symbol: String,
    /// Replacement metadata applied to the minted unit in the final stage.
    pub amended_metadata: String,
}

/// Inputs for a standalone metadata amendment.
///
/// All fields arrive as raw strings from the caller and are validated
/// before any collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmendMetadataRequest {
    pub token_id: String,
    pub serial_number: String,
    pub new_metadata: String,
    /// Metadata authority private key, hex encoded.
    pub metadata_key: String,
}

/// How one pipeline stage ended.
#[derive(Debug)]
pub enum StageOutcome<T> {
    Completed(T),
    Failed(SdkError),
    /// Never attempted because an earlier stage failed.
    Skipped,
}

impl<T> StageOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn completed(&self) -> Option<&T> {
        match self {
            Self::Completed(value) => Some(value),
            _ => None,
        }
    }
}

/// Create-stage result surfaced in the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetClassCreated {
    pub token_id: TokenId,
    /// Hex public key of the supply authority. The private half is
    /// dropped when the run ends.
    pub supply_public_key: String,
    /// Hex public key of the metadata authority. The private half is
    /// dropped when the run ends.
    pub metadata_public_key: String,
}

/// Mint-stage result surfaced in the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMinted {
    pub serial: u64,
    pub transaction_id: TransactionId,
}

/// Per-stage outcomes of one lifecycle run.
#[derive(Debug)]
pub struct LifecycleReport {
    pub create: StageOutcome<AssetClassCreated>,
    pub mint: StageOutcome<UnitMinted>,
    pub amend: StageOutcome<()>,
}

impl LifecycleReport {
    pub fn succeeded(&self) -> bool {
        self.create.is_completed() && self.mint.is_completed() && self.amend.is_completed()
    }

    fn aborted_at_create(error: SdkError) -> Self {
        Self {
            create: StageOutcome::Failed(error),
            mint: StageOutcome::Skipped,
            amend: StageOutcome::Skipped,
        }
    }
}

/// Stage-1 output threaded through the rest of the run.
struct CreatedAssetClass {
    token_id: TokenId,
    supply_key: AuthorityKey,
    metadata_key: AuthorityKey,
}

/// Sub-client for the asset lifecycle pipeline.
pub struct Lifecycle<'a> {
    pub(crate) client: &'a HashbridgeClient,
}

impl Lifecycle<'_> {
    /// Run the full create → mint → amend pipeline.
    ///
    /// Never returns an error: partial failure is surfaced per stage in
    /// the report, and every failure is logged at its call site.
    pub async fn run(&self, params: LifecycleParams) -> LifecycleReport {
        if params.name.trim().is_empty()
            || params.symbol.trim().is_empty()
            || params.amended_metadata.trim().is_empty()
        {
            warn!("lifecycle run aborted: all fields are required");
            return LifecycleReport::aborted_at_create(SdkError::Validation(
                "all fields are required".to_string(),
            ));
        }

        let signer = match self.active_signer() {
            Ok(signer) => signer,
            Err(e) => return LifecycleReport::aborted_at_create(e),
        };

        let created = match self.create_asset_class(signer.as_ref(), &params).await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "asset class creation failed; aborting lifecycle run");
                return LifecycleReport::aborted_at_create(e);
            }
        };

        let create_outcome = StageOutcome::Completed(AssetClassCreated {
            token_id: created.token_id.clone(),
            supply_public_key: created.supply_key.public_key_hex(),
            metadata_public_key: created.metadata_key.public_key_hex(),
        });

        let minted = match self
            .mint_unit(signer.as_ref(), &created.token_id, &created.supply_key)
            .await
        {
            Ok(minted) => minted,
            Err(e) => {
                warn!(error = %e, token_id = %created.token_id, "mint failed; aborting lifecycle run");
                return LifecycleReport {
                    create: create_outcome,
                    mint: StageOutcome::Failed(e),
                    amend: StageOutcome::Skipped,
                };
            }
        };

        let amend_outcome = match self
            .amend_unit_metadata(
                signer.as_ref(),
                &created.token_id,
                minted.serial,
                &created.metadata_key,
                &params.amended_metadata,
            )
            .await
        {
            Ok(()) => StageOutcome::Completed(()),
            Err(e) => {
                warn!(error = %e, token_id = %created.token_id, "metadata amendment failed");
                StageOutcome::Failed(e)
            }
        };

        LifecycleReport {
            create: create_outcome,
            mint: StageOutcome::Completed(minted),
            amend: amend_outcome,
        }
    }

    /// Amend one unit's metadata outside the pipeline, for an asset created
    /// earlier. The metadata authority key arrives as an operator-supplied
    /// string.
    pub async fn amend(&self, request: AmendMetadataRequest) -> Result<(), SdkError> {
        let AmendMetadataRequest {
            token_id,
            serial_number,
            new_metadata,
            metadata_key,
        } = request;

        if token_id.trim().is_empty()
            || serial_number.trim().is_empty()
            || new_metadata.trim().is_empty()
            || metadata_key.trim().is_empty()
        {
            warn!("metadata amendment aborted: all fields are required");
            return Err(SdkError::Validation("all fields are required".to_string()));
        }

        let serial: u64 = serial_number.trim().parse().map_err(|_| {
            warn!(serial_number = %serial_number, "metadata amendment aborted: invalid serial number");
            SdkError::Validation(format!("invalid serial number: {serial_number}"))
        })?;
        let key: AuthorityKey = metadata_key.parse().map_err(|e: LedgerError| {
            warn!(error = %e, "metadata amendment aborted: bad metadata key");
            SdkError::from(e)
        })?;

        let signer = self.active_signer()?;
        self.amend_unit_metadata(
            signer.as_ref(),
            &TokenId::from(token_id.trim()),
            serial,
            &key,
            &new_metadata,
        )
        .await
    }

    // ── Stages ───────────────────────────────────────────────────────────

    /// Stage 1: create the asset class and its authority keys.
    async fn create_asset_class(
        &self,
        signer: &dyn TransactionSigner,
        params: &LifecycleParams,
    ) -> Result<CreatedAssetClass, SdkError> {
        let treasury = signer.account_id();
        let supply_key = AuthorityKey::generate();
        let metadata_key = AuthorityKey::generate();

        let request = TokenCreateRequest {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            token_type: TokenType::NonFungibleUnique,
            treasury_account_id: treasury.clone(),
            auto_renew_account_id: treasury.clone(),
            auto_renew_period_secs: DEFAULT_AUTO_RENEW_PERIOD_SECS,
            supply_key: supply_key.public_key_hex(),
            metadata_key: metadata_key.public_key_hex(),
        };

        let limit = self.client.call_timeout;
        let mut envelope = TransactionEnvelope::new(TransactionBody::TokenCreate(request))
            .with_transaction_id(TransactionId::generate(&treasury));

        with_limit(limit, envelope.freeze_with_signer(signer)).await?;
        let submitted = with_limit(limit, envelope.execute_with_signer(signer)).await?;
        let receipt = with_limit(limit, signer.receipt(&submitted)).await?;

        if !receipt.is_success() {
            return Err(LedgerError::BadStatus {
                status: receipt.status,
            }
            .into());
        }
        let token_id = receipt.token_id.ok_or(LedgerError::MissingTokenId)?;

        info!(token_id = %token_id, "asset class created");
        Ok(CreatedAssetClass {
            token_id,
            supply_key,
            metadata_key,
        })
    }

    /// Stage 2: mint one unit, co-signed by the supply authority.
    async fn mint_unit(
        &self,
        signer: &dyn TransactionSigner,
        token_id: &TokenId,
        supply_key: &AuthorityKey,
    ) -> Result<UnitMinted, SdkError> {
        let request = TokenMintRequest {
            token_id: token_id.clone(),
            metadata: UNIT_METADATA_URI.as_bytes().to_vec(),
        };

        let limit = self.client.call_timeout;
        let mut envelope = TransactionEnvelope::new(TransactionBody::TokenMint(request));

        with_limit(limit, envelope.freeze_with_signer(signer)).await?;
        // The wallet signer authorizes submission and fees; the supply
        // authority authorizes the mint itself.
        envelope.sign(supply_key)?;
        let submitted = with_limit(limit, envelope.execute_with_signer(signer)).await?;
        let receipt = with_limit(limit, signer.receipt(&submitted)).await?;

        if !receipt.is_success() {
            return Err(LedgerError::BadStatus {
                status: receipt.status,
            }
            .into());
        }
        let serial = receipt
            .serials
            .first()
            .copied()
            .ok_or(LedgerError::MissingSerial)?;

        info!(token_id = %token_id, serial, "unit minted");
        Ok(UnitMinted {
            serial,
            transaction_id: submitted.transaction_id,
        })
    }

    /// Stage 3: amend one unit's metadata, co-signed by the metadata
    /// authority.
    ///
    /// The replacement text is UTF-8 encoded exactly once. No receipt is
    /// awaited for this stage; submission acceptance is the confirmation.
    async fn amend_unit_metadata(
        &self,
        signer: &dyn TransactionSigner,
        token_id: &TokenId,
        serial: u64,
        metadata_key: &AuthorityKey,
        new_metadata: &str,
    ) -> Result<(), SdkError> {
        let request = TokenUpdateNftsRequest {
            token_id: token_id.clone(),
            serial_numbers: vec![serial],
            metadata: new_metadata.as_bytes().to_vec(),
        };

        let limit = self.client.call_timeout;
        let mut envelope = TransactionEnvelope::new(TransactionBody::TokenUpdateNfts(request));

        with_limit(limit, envelope.freeze_with_signer(signer)).await?;
        envelope.sign(metadata_key)?;
        with_limit(limit, envelope.execute_with_signer(signer)).await?;

        info!(token_id = %token_id, serial, "nft metadata amended");
        Ok(())
    }

    fn active_signer(&self) -> Result<Arc<dyn TransactionSigner>, SdkError> {
        self.client.session().signer().ok_or_else(|| {
            warn!("no active signer; pair a wallet first");
            PairingError::NoActiveSigner.into()
        })
    }
}

/// Bound a ledger call by the configured timeout, if any.
async fn with_limit<T, F>(limit: Option<Duration>, fut: F) -> Result<T, SdkError>
where
    F: Future<Output = Result<T, LedgerError>>,
{
    match bounded(fut, limit).await {
        Ok(inner) => inner.map_err(SdkError::from),
        Err(elapsed) => Err(LedgerError::Timeout(elapsed.limit).into()),
    }
}
