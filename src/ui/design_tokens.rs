// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the toast stage and the demo window.

## Organization

- **Palette**: Base colors and per-kind accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_snackbar::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let track = Color {
    a: opacity::TRACK,
    ..palette::WHITE
};

let gap = spacing::SM; // 12px between cards
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb8(0xa0, 0xa0, 0xa0);

    // Kind accents
    pub const INFO: Color = Color::from_rgb8(0x58, 0xa6, 0xff);
    pub const WARNING: Color = Color::from_rgb8(0xe3, 0xb3, 0x41);
    pub const SUCCESS: Color = Color::from_rgb8(0x56, 0xd3, 0x64);
    pub const ERROR: Color = Color::from_rgb8(0xf8, 0x51, 0x49);
    pub const CART: Color = Color::from_rgb8(0xa3, 0x71, 0xf7);
    pub const WISHLIST: Color = Color::from_rgb8(0xdb, 0x61, 0xa2);
    pub const FAVORITE: Color = Color::from_rgb8(0xf0, 0xd5, 0x53);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Progress bar track
    pub const TRACK: f32 = 0.12;
    /// Action button hover fill
    pub const HOVER: f32 = 0.08;
    /// Action button outline
    pub const OUTLINE: f32 = 0.2;
    /// Progress bar fill
    pub const FILL: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    /// Distance between a container and the window edge.
    pub const EDGE: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON: f32 = 26.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PROGRESS_HEIGHT: f32 = 4.0;

    /// Characters per message line used to approximate a line clamp.
    pub const CHARS_PER_LINE: usize = 48;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Notification message
    pub const BODY: f32 = 15.0;

    /// Action buttons
    pub const BODY_SM: f32 = 13.0;

    /// Kind glyph
    pub const GLYPH: f32 = 18.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 14.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::Vector;

    pub const OFFSET: Vector = Vector { x: 0.0, y: 8.0 };
    pub const BLUR: f32 = 24.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRACK < opacity::FILL);

    assert!(sizing::CHARS_PER_LINE > 0);

    assert!(typography::BODY > typography::BODY_SM);
    assert!(radius::LG > radius::MD);
};
