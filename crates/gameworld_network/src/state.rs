use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::OsRng;
use rsa::RsaPrivateKey;

use gameworld_collab::{BanAuthority, LoginAuthority};
use gameworld_dispatch::DispatcherHandle;

use crate::config::GameworldConfig;
use crate::world::GameWorld;

/// Everything the accept loop needs, shared across every connection via
/// one `Arc`. Mirrors the teacher's `SharedNetworkState`: a private inner
/// struct behind a cheaply-cloneable outer handle.
pub struct SharedNetworkState<W> {
    inner: Arc<Inner<W>>,
}

impl<W> Clone for SharedNetworkState<W> {
    fn clone(&self) -> Self {
        SharedNetworkState { inner: Arc::clone(&self.inner) }
    }
}

struct Inner<W> {
    config: GameworldConfig,
    rsa_key: RsaPrivateKey,
    login: Arc<dyn LoginAuthority>,
    ban: Arc<dyn BanAuthority>,
    dispatcher: DispatcherHandle<W>,
    next_session_id: AtomicU64,
}

impl<W: GameWorld> SharedNetworkState<W> {
    pub fn new(
        config: GameworldConfig,
        login: Arc<dyn LoginAuthority>,
        ban: Arc<dyn BanAuthority>,
        dispatcher: DispatcherHandle<W>,
    ) -> anyhow::Result<Self> {
        let rsa_key = RsaPrivateKey::new(&mut OsRng, 1024)?;

        Ok(SharedNetworkState {
            inner: Arc::new(Inner {
                config,
                rsa_key,
                login,
                ban,
                dispatcher,
                next_session_id: AtomicU64::new(1),
            }),
        })
    }

    pub fn config(&self) -> &GameworldConfig {
        &self.inner.config
    }

    pub fn rsa_key(&self) -> &RsaPrivateKey {
        &self.inner.rsa_key
    }

    /// The public half of the server's handshake key, for distribution to
    /// client builds (out of band — never sent over this protocol's wire).
    pub fn rsa_public_key(&self) -> rsa::RsaPublicKey {
        rsa::RsaPublicKey::from(&self.inner.rsa_key)
    }

    pub fn login(&self) -> &Arc<dyn LoginAuthority> {
        &self.inner.login
    }

    pub fn ban(&self) -> &Arc<dyn BanAuthority> {
        &self.inner.ban
    }

    pub fn dispatcher(&self) -> &DispatcherHandle<W> {
        &self.inner.dispatcher
    }

    pub fn next_session_id(&self) -> u64 {
        self.inner.next_session_id.fetch_add(1, Ordering::Relaxed)
    }
}
