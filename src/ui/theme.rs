//! Shared class strings so pages stay visually consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "w-full bg-slate-900 py-4 text-xs font-black tracking-widest text-white transition-all hover:bg-blue-600";

pub const BTN_SECONDARY: &str = "border border-slate-300 px-4 py-2 text-xs font-black uppercase tracking-widest text-slate-700 hover:bg-slate-100";

pub const BTN_LINK: &str = "border-b border-black text-[10px] font-black";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "text-[11px] font-black uppercase tracking-widest text-blue-600"
    } else {
        "text-[11px] font-black uppercase tracking-widest text-slate-400 transition-colors hover:text-slate-900"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT_NUMBER: &str = "w-full border-b-2 border-slate-200 py-3 text-2xl font-black outline-none transition-colors focus:border-blue-600";

pub const INPUT_TEXT: &str = "w-full border border-slate-200 px-4 py-3 text-sm outline-none focus:border-blue-600";

pub const INPUT_AREA: &str = "h-32 w-full resize-y border border-slate-200 px-4 py-3 font-mono text-sm outline-none focus:border-blue-600";

pub const LABEL: &str = "block text-[10px] font-black uppercase tracking-widest text-slate-400";

// ============================================
// PANEL STYLES
// ============================================

pub const PANEL: &str = "border border-slate-100 bg-white p-8";

pub const PANEL_MUTED: &str = "border border-slate-100 bg-slate-50 p-8";

// ============================================
// TONES
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Accent,
    Positive,
    Negative,
    Warning,
}

impl Tone {
    pub fn for_amount(amount: i64) -> Self {
        match amount {
            a if a > 0 => Tone::Positive,
            0 => Tone::Neutral,
            _ => Tone::Negative,
        }
    }

    pub fn for_rate(stale: bool) -> Self {
        if stale {
            Tone::Warning
        } else {
            Tone::Accent
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Tone::Neutral => "text-slate-900",
            Tone::Accent => "text-blue-600",
            Tone::Positive => "text-emerald-600",
            Tone::Negative => "text-rose-600",
            Tone::Warning => "text-amber-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_rate_uses_warning_tone() {
        assert_eq!(Tone::for_rate(true), Tone::Warning);
        assert_eq!(Tone::for_rate(true).text(), "text-amber-600");
        assert_eq!(Tone::for_rate(false).text(), "text-blue-600");
    }

    #[test]
    fn amount_tones() {
        assert_eq!(Tone::for_amount(44_100), Tone::Positive);
        assert_eq!(Tone::for_amount(0), Tone::Neutral);
        assert_eq!(Tone::for_amount(-1), Tone::Negative);
    }
}
