use futures::future::BoxFuture;

/// Runs fire-and-forget work (notifications, analytics) off the request path
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, future: BoxFuture<'static, ()>);
}
