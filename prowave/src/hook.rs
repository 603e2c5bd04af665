/// What the host firmware should do after a user hook returns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HookResult {
    /// The hook did all the work, skip the built-in behaviour
    Handled,
    /// Run the built-in behaviour as well
    DeferToDefault,
}

impl HookResult {
    /// The boolean QMK-style hooks return: `true` lets the built-in behaviour run
    pub fn runs_default(self) -> bool {
        matches!(self, HookResult::DeferToDefault)
    }
}

impl From<HookResult> for bool {
    fn from(result: HookResult) -> Self {
        result.runs_default()
    }
}
