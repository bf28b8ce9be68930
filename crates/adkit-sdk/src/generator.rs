use rand::RngCore;

/// Produces offer ids for ad links that carry no `id` query parameter.
///
/// Implementations are pure generators that don't interact with the
/// registry; each call must yield a fresh, unique id.
pub trait OfferIdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Random 16-byte base58 ids.
///
/// Collisions are negligible at this width, so no registry lookup is
/// performed before use.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOfferId;

impl OfferIdGenerator for RandomOfferId {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        bs58::encode(bytes).into_string()
    }
}
