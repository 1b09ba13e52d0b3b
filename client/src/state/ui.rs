//! Local UI chrome state shared through context.

/// Tooltip behavior for every `Tooltip` under the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipContext {
    pub delay_ms: u32,
}

impl Default for TooltipContext {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}
