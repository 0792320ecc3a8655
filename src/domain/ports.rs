/// The host's "open this URL in a new tab/window" capability.
///
/// Fire-and-forget: implementations never report failure back to the widget.
pub trait BrowsingContext: Send + Sync {
    fn open_in_new_context(&self, url: &str);
}

impl<T: BrowsingContext + ?Sized> BrowsingContext for &T {
    fn open_in_new_context(&self, url: &str) {
        (**self).open_in_new_context(url)
    }
}
