//! Sample texts and the welcome banner.

use the_direction::Direction;

use crate::{
  config::SamplesConfig,
  screen::{
    Screen,
    Tone,
  },
};

const RULE: &str = "========================================";

const LTR: &[&str] = &[
  "This is Left-to-Right (LTR) text.",
  "Most Western languages use LTR direction.",
  "Example: English, Spanish, French, German",
  "Hello, World! This is a test of LTR rendering.",
  "Terminal output should flow from left to right.",
];

const RTL: &[&str] = &[
  "هذا نص من اليمين إلى اليسار (RTL).",
  "اللغة العربية والعبرية والفارسية تستخدم اتجاه RTL.",
  "مثال: مرحباً بالعالم! این یک تست برای نمایش راست به چپ است.",
  "يجب أن يتدفق إخراج الطرفية من اليمين إلى اليسار.",
  "اختبار الأرقام مع النص العربي: 12345",
];

const MIXED: &[&str] = &[
  "Mixed: English English متن فارسی Persian text",
  "Hello سلام World دنیا",
  "LTR: Left to Right | RTL: از راست به چپ",
  "Numbers work in both: ١٢٣ (Arabic) vs 123 (English)",
  "Bidirectional text: Start [پایان] End",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSet {
  Ltr,
  Rtl,
  Mixed,
}

impl SampleSet {
  pub fn title(self) -> &'static str {
    match self {
      Self::Ltr => "LTR Text Examples",
      Self::Rtl => "RTL Text Examples",
      Self::Mixed => "Mixed Direction Text",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples {
  ltr:   Vec<String>,
  rtl:   Vec<String>,
  mixed: Vec<String>,
}

impl Samples {
  /// Built-in texts, with any set given in `config` replacing its default.
  pub fn from_config(config: &SamplesConfig) -> Self {
    let pick = |custom: &Option<Vec<String>>, builtin: &[&str]| {
      custom
        .clone()
        .unwrap_or_else(|| builtin.iter().map(|s| s.to_string()).collect())
    };
    Self {
      ltr:   pick(&config.ltr, LTR),
      rtl:   pick(&config.rtl, RTL),
      mixed: pick(&config.mixed, MIXED),
    }
  }

  pub fn get(&self, set: SampleSet) -> &[String] {
    match set {
      SampleSet::Ltr => &self.ltr,
      SampleSet::Rtl => &self.rtl,
      SampleSet::Mixed => &self.mixed,
    }
  }

  pub fn write(&self, screen: &mut Screen, set: SampleSet) {
    screen.write_tone(&format!("\n--- {} ---", set.title()), Tone::Heading);
    for text in self.get(set) {
      screen.writeln(text);
    }
    screen.writeln("");
  }
}

impl Default for Samples {
  fn default() -> Self {
    Self::from_config(&SamplesConfig::default())
  }
}

pub fn flow_description(direction: Direction) -> &'static str {
  match direction {
    Direction::Ltr => "Left to Right",
    Direction::Rtl => "Right to Left",
  }
}

pub fn write_welcome(screen: &mut Screen, direction: Direction) {
  screen.write_tone("the-direction demo", Tone::Heading);
  screen.write_tone(RULE, Tone::Rule);
  screen.writeln("");
  screen.writeln("This demo shows how to use the direction add-on to switch");
  screen.writeln("between RTL (Right-to-Left) and LTR (Left-to-Right) modes.");
  screen.writeln("");
  screen.write_tone(
    &format!(
      "Current mode: {} ({})",
      direction.as_str().to_uppercase(),
      flow_description(direction).replace(' ', "-")
    ),
    Tone::Success,
  );
  screen.writeln("");
  screen.writeln("Keys:");
  screen.writeln("  • l / r / t   switch to LTR, RTL, or toggle");
  screen.writeln("  • 1 / 2 / 3   write LTR, RTL, or mixed samples");
  screen.writeln("  • Ctrl+L      clear the terminal");
  screen.writeln("  • Ctrl+R      reset the terminal");
  screen.writeln("  • Ctrl+F      fit the terminal to the window");
  screen.writeln("  • q           quit");
  screen.writeln("");
  screen.write_tone(RULE, Tone::Rule);
  screen.writeln("");
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn config_replaces_only_given_sets() {
    let config = SamplesConfig {
      rtl: Some(vec!["שלום".to_string()]),
      ..SamplesConfig::default()
    };
    let samples = Samples::from_config(&config);
    assert_eq!(samples.get(SampleSet::Rtl), ["שלום".to_string()]);
    assert_eq!(samples.get(SampleSet::Ltr).len(), LTR.len());
    assert_eq!(samples.get(SampleSet::Mixed)[1], "Hello سلام World دنیا");
  }

  #[test]
  fn write_adds_title_and_trailing_blank() {
    let mut screen = Screen::new(80, 24, 100);
    Samples::default().write(&mut screen, SampleSet::Mixed);

    let lines: Vec<_> = screen.lines().collect();
    assert_eq!(lines.len(), MIXED.len() + 3);
    assert_eq!(lines[1].text, "--- Mixed Direction Text ---");
    assert_eq!(lines[1].tone, Tone::Heading);
    assert_eq!(lines.last().unwrap().text, "");
  }

  #[test]
  fn welcome_reports_current_mode() {
    let mut screen = Screen::new(80, 24, 100);
    write_welcome(&mut screen, Direction::Rtl);
    assert!(
      screen
        .lines()
        .any(|line| line.text == "Current mode: RTL (Right-to-Left)")
    );
  }
}
