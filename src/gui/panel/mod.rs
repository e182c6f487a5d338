mod layout;

pub(in crate::gui) use layout::{PanelLayout, PanelView, compute_panel_layout};

use super::fields::FocusField;

/// Numeric stepper controls in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::gui) enum StepperKind {
    FontSize,
    LineHeight,
}

/// Dropdown selectors in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::gui) enum DropdownKind {
    Font,
    Align,
}

/// Action buttons at the bottom of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::gui) enum PanelButton {
    SaveDraft,
    LoadDraft,
    CopyText,
    DownloadImage,
    ExportText,
    Reset,
}

impl PanelButton {
    pub fn label(self, exporting: bool) -> &'static str {
        match self {
            PanelButton::SaveDraft => "Save Draft",
            PanelButton::LoadDraft => "Load Draft",
            PanelButton::CopyText => "Copy Text",
            PanelButton::DownloadImage => {
                if exporting {
                    "Generating..."
                } else {
                    "Download as Image"
                }
            }
            PanelButton::ExportText => "Export as Text",
            PanelButton::Reset => "Reset",
        }
    }
}

/// Result of panel hit-testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::gui) enum PanelHit {
    Field(FocusField),
    StepperMinus(StepperKind),
    StepperPlus(StepperKind),
    DropdownButton(DropdownKind),
    DropdownOption(DropdownKind, usize),
    TextSwatch(usize),
    BackgroundSwatch(usize),
    TemplateCell(usize),
    Button(PanelButton),
}
