//! Application Context
//!
//! Shared services and signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::catalog::SharedCatalogSource;
use crate::config::AppConfig;
use crate::models::ItemId;

/// Transient "added to cart" message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u32,
    pub item: ItemId,
}

impl Notice {
    /// Clear `slot` only if it still holds notice `seq`
    pub fn expire(slot: &mut Option<Notice>, seq: u32) {
        if slot.as_ref().map(|n| n.seq) == Some(seq) {
            *slot = None;
        }
    }
}

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Where the catalog page loads dishes from
    pub catalog: SharedCatalogSource,
    /// Current notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        catalog: SharedCatalogSource,
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            config,
            catalog,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show the added notice for `item`, then hide it after `notice_ms`
    pub fn announce(&self, item: ItemId) {
        let seq = self.notice.get_untracked().map_or(0, |n| n.seq.wrapping_add(1));
        self.set_notice.set(Some(Notice { seq, item }));

        let set_notice = self.set_notice;
        let delay = self.config.notice_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let _ = set_notice.try_update(|slot| Notice::expire(slot, seq));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
