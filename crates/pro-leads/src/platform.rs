//! Collaborators the controller talks to.
//!
//! The controller runs on a single thread (the browser event loop or a
//! `tokio` `LocalSet`), so none of these traits require `Send`.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::error::{ClipboardError, StoreError};
use crate::record::LeadRecord;

/// Append-only persistence for lead records.
#[async_trait(?Send)]
pub trait LeadStore {
    /// Insert one record.
    async fn insert(&self, record: &LeadRecord) -> Result<(), StoreError>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "store"
    }
}

/// Host services: page location, clipboard, timers and task spawning.
#[async_trait(?Send)]
pub trait Platform {
    /// URL of the page being shown.
    fn page_url(&self) -> String;

    /// Put `text` on the system clipboard.
    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError>;

    /// Resolve after `duration`.
    async fn sleep(&self, duration: Duration);

    /// Run `task` to completion in the background on the current thread.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

#[async_trait(?Send)]
impl<T: LeadStore + ?Sized> LeadStore for std::rc::Rc<T> {
    async fn insert(&self, record: &LeadRecord) -> Result<(), StoreError> {
        (**self).insert(record).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait(?Send)]
impl<T: LeadStore + ?Sized> LeadStore for Box<T> {
    async fn insert(&self, record: &LeadRecord) -> Result<(), StoreError> {
        (**self).insert(record).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait(?Send)]
impl<T: Platform + ?Sized> Platform for std::rc::Rc<T> {
    fn page_url(&self) -> String {
        (**self).page_url()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_clipboard(text).await
    }

    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        (**self).spawn_local(task)
    }
}
