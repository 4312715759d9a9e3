/// Ordered collection of per-frame update hooks
///
/// Hooks are registered during one-time scene construction and invoked once
/// per frame, in registration order, with a shared mutable context and the
/// current time. Later hooks observe mutations made by earlier hooks within
/// the same frame. There is no removal and no deduplication.
pub struct UpdateHooks<C> {
    hooks: Vec<Box<dyn FnMut(&mut C, f32)>>,
}

impl<C> UpdateHooks<C> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Append a hook to the end of the sequence
    pub fn register<F>(&mut self, hook: F)
    where
        F: FnMut(&mut C, f32) + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Invoke every hook exactly once, in registration order
    ///
    /// Runs to completion before returning; a panicking hook propagates to
    /// the caller.
    pub fn run_all(&mut self, context: &mut C, time: f32) {
        for hook in self.hooks.iter_mut() {
            hook(context, time);
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<C> Default for UpdateHooks<C> {
    fn default() -> Self {
        Self::new()
    }
}
