//! Identifiers under which contracts are registered in the address provider.
//!
//! Each identifier is the Keccak-256 hash of a human-readable label.

use alloy_primitives::{b256, keccak256, B256};

/// A key into the address provider, pairing a label with its digest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressId {
    /// The human-readable label
    label: &'static str,
    /// `keccak256(label)`
    digest: B256,
}

impl AddressId {
    /// The yearn 4626 router
    pub const ROUTER: AddressId = AddressId::new(
        "ROUTER",
        b256!("eb4fd9f47c063b511700e1c8e94e2fa4088ffca1fdcef1e60edf1beecd1b2e64"),
    );
    /// The release registry
    pub const RELEASE_REGISTRY: AddressId = AddressId::new(
        "RELEASE REGISTRY",
        b256!("0011a71e39404cb1cadd6d032cb2226ed09eb5eaaa43229efda1d045d464cbf7"),
    );
    /// The registry factory
    pub const REGISTRY_FACTORY: AddressId = AddressId::new(
        "REGISTRY FACTORY",
        b256!("f74f6abf7ba907f531d0db8a825641d7c980052e02b1c4c85e08b076e2b3d1a5"),
    );
    /// The common report trigger
    pub const COMMON_REPORT_TRIGGER: AddressId = AddressId::new(
        "COMMON REPORT TRIGGER",
        b256!("f911b2645a55f879d994298b8148bde7695debcb58fc4f1ab3245d7ccd30dc79"),
    );
    /// The base fee provider
    pub const BASE_FEE_PROVIDER: AddressId = AddressId::new(
        "BASE FEE PROVIDER",
        b256!("0edea92d7da75a504490c20b95ee5fb06e32f6059488daad993cb1d16ae9cf5a"),
    );
    /// The APR oracle
    pub const APR_ORACLE: AddressId = AddressId::new(
        "APR ORACLE",
        b256!("59ce41b29c1cee7a78543ab8603f382f2f6d7601d44287cc57cd2681dfd27139"),
    );

    /// Every known identifier
    pub const ALL: [AddressId; 6] = [
        Self::ROUTER,
        Self::RELEASE_REGISTRY,
        Self::REGISTRY_FACTORY,
        Self::COMMON_REPORT_TRIGGER,
        Self::BASE_FEE_PROVIDER,
        Self::APR_ORACLE,
    ];

    /// Pair a label with its precomputed digest
    const fn new(label: &'static str, digest: B256) -> Self {
        Self { label, digest }
    }

    /// The human-readable label
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The key used in the address provider
    pub const fn digest(&self) -> B256 {
        self.digest
    }

    /// Look up a known identifier by its label
    pub fn from_label(label: &str) -> Option<AddressId> {
        Self::ALL.into_iter().find(|id| id.label == label)
    }

    /// Look up a known identifier by its digest
    pub fn from_digest(digest: B256) -> Option<AddressId> {
        Self::ALL.into_iter().find(|id| id.digest == digest)
    }
}

/// Hash a label into an address provider key
pub fn hash_label(label: &str) -> B256 {
    keccak256(label.as_bytes())
}

impl From<AddressId> for B256 {
    fn from(id: AddressId) -> Self {
        id.digest
    }
}
