//! Form state for the interactive TUI.

use outreach_core::{Block, Clipboard, ComposedOutput, OutreachProfile, compose, copy_with_notice};

/// One input on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Region,
    Tone,
    Country,
    TargetRole,
    BusinessName,
    Phone,
    Products,
    Offerings,
    Uniques,
    Certifications,
    Incoterms,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Self::Region,
        Self::Tone,
        Self::Country,
        Self::TargetRole,
        Self::BusinessName,
        Self::Phone,
        Self::Products,
        Self::Offerings,
        Self::Uniques,
        Self::Certifications,
        Self::Incoterms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Region => "Region preset",
            Self::Tone => "Tone",
            Self::Country => "Target country/region (optional)",
            Self::TargetRole => "Target role",
            Self::BusinessName => "Your business name",
            Self::Phone => "WhatsApp number (international)",
            Self::Products => "Products (comma-separated)",
            Self::Offerings => "Product highlights (one per line)",
            Self::Uniques => "Unique strengths (one per line)",
            Self::Certifications => "Certifications (one per line)",
            Self::Incoterms => "Incoterms",
        }
    }

    /// Example shown while the field is empty.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Country => "e.g., UAE, Germany",
            Self::TargetRole => "Procurement Manager / Import Manager",
            Self::BusinessName => "Your company",
            Self::Phone => "+9715xxxxxxx",
            Self::Products => "Organic turmeric, black pepper, cumin",
            Self::Offerings => "Curcumin 5%-7% / ASTA Black Pepper 500+ g/l",
            Self::Uniques => "Farm-direct sourcing / Flexible MOQs",
            Self::Certifications => "USDA Organic / FSSC 22000 / HALAL",
            Self::Incoterms => "FOB, CIF, EXW",
            Self::Region | Self::Tone => "",
        }
    }

    /// Region and tone pick from a fixed list instead of taking text.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Region | Self::Tone)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Offerings | Self::Uniques | Self::Certifications)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Application state for the form.
pub struct App {
    pub profile: OutreachProfile,
    pub output: ComposedOutput,
    pub focus: Field,
    pub output_scroll: u16,
    pub status_message: Option<String>,
    pub should_quit: bool,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(profile: OutreachProfile, clipboard: Box<dyn Clipboard>) -> Self {
        let output = compose(&profile);
        Self {
            profile,
            output,
            focus: Field::Region,
            output_scroll: 0,
            status_message: None,
            should_quit: false,
            clipboard,
        }
    }

    fn recompute(&mut self) {
        self.output = compose(&self.profile);
    }

    /// Display value of a field.
    pub fn value(&self, field: Field) -> String {
        let p = &self.profile;
        match field {
            Field::Region => p.region.to_string(),
            Field::Tone => p.tone.to_string(),
            Field::Country => p.country.clone(),
            Field::TargetRole => p.target_role.clone(),
            Field::BusinessName => p.business_name.clone(),
            Field::Phone => p.phone.clone(),
            Field::Products => p.products.clone(),
            Field::Offerings => p.offerings.clone(),
            Field::Uniques => p.uniques.clone(),
            Field::Certifications => p.certifications.clone(),
            Field::Incoterms => p.incoterms.clone(),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let p = &mut self.profile;
        match field {
            Field::Region | Field::Tone => None,
            Field::Country => Some(&mut p.country),
            Field::TargetRole => Some(&mut p.target_role),
            Field::BusinessName => Some(&mut p.business_name),
            Field::Phone => Some(&mut p.phone),
            Field::Products => Some(&mut p.products),
            Field::Offerings => Some(&mut p.offerings),
            Field::Uniques => Some(&mut p.uniques),
            Field::Certifications => Some(&mut p.certifications),
            Field::Incoterms => Some(&mut p.incoterms),
        }
    }

    // -- Navigation --

    pub fn focus_next(&mut self) {
        let idx = (self.focus.index() + 1) % Field::ALL.len();
        self.focus = Field::ALL[idx];
    }

    pub fn focus_prev(&mut self) {
        let idx = (self.focus.index() + Field::ALL.len() - 1) % Field::ALL.len();
        self.focus = Field::ALL[idx];
    }

    pub fn scroll_output_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(5);
    }

    pub fn scroll_output_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(5);
    }

    // -- Editing: every mutation recomputes the outputs --

    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        if let Some(text) = self.text_mut(focus) {
            text.push(c);
            self.recompute();
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(text) = self.text_mut(focus) {
            if text.pop().is_some() {
                self.recompute();
            }
        }
    }

    /// Enter: new line in multi-line fields, next field elsewhere.
    pub fn enter(&mut self) {
        if self.focus.is_multiline() {
            self.insert_char('\n');
        } else {
            self.focus_next();
        }
    }

    pub fn clear_field(&mut self) {
        let focus = self.focus;
        if let Some(text) = self.text_mut(focus) {
            text.clear();
            self.recompute();
        }
    }

    /// Left/Right on a choice field steps through its options.
    pub fn cycle_choice(&mut self, forward: bool) {
        let p = &mut self.profile;
        match (self.focus, forward) {
            (Field::Region, true) => p.region = p.region.next(),
            (Field::Region, false) => p.region = p.region.prev(),
            (Field::Tone, true) => p.tone = p.tone.next(),
            (Field::Tone, false) => p.tone = p.tone.prev(),
            _ => return,
        }
        self.recompute();
    }

    pub fn copy(&mut self, block: Block) {
        let notice = copy_with_notice(self.clipboard.as_mut(), self.output.block(block));
        self.status_message = Some(notice.to_string());
    }
}
