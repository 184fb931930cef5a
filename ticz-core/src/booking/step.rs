/// Defines the sequence of screens in the booking wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Selection,
    Details,
    Confirmation,
}

impl WizardStep {
    pub const TOTAL: u8 = 3;

    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Selection,
            WizardStep::Details,
            WizardStep::Confirmation,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Selection => "Ticket Selection",
            WizardStep::Details => "Attendee Details",
            WizardStep::Confirmation => "Ready",
        }
    }

    /// 1-based position used by the progress header.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Selection => 1,
            WizardStep::Details => 2,
            WizardStep::Confirmation => 3,
        }
    }

    pub fn progress_percent(&self) -> u16 {
        (u16::from(self.number()) * 100) / u16::from(Self::TOTAL)
    }

    // Helper to get the next step in the sequence
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Selection => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => None,
        }
    }

    // The booked ticket has no way back; only Details returns to Selection.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Selection),
            _ => None,
        }
    }
}
