/// Callbacks from a page view-model into the rendering layer
pub trait ViewHooks {
    /// Local state changed; views should re-render
    fn refresh(&self);

    /// A reservation was just confirmed
    fn reserved(&self) {}
}
