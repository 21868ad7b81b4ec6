//! Celebration confetti.

use leptos::prelude::*;

const COLORS: [&str; 3] = ["#64ffda", "#b794f4", "#b794f4"];
const PIECES: usize = 120;

/// One falling confetti piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub rotation_deg: u32,
    pub color: &'static str,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; background: {}; animation-delay: {}ms; animation-duration: {}ms; transform: rotate({}deg);",
            self.left_pct, self.color, self.delay_ms, self.duration_ms, self.rotation_deg
        )
    }
}

/// Deterministic scatter of `count` pieces.
pub fn confetti_pieces(count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|i| {
            // Knuth multiplicative hash spreads consecutive indices.
            let n = (i as u32).wrapping_mul(2_654_435_761);
            ConfettiPiece {
                left_pct: (n % 1000) as f32 / 10.0,
                delay_ms: (n >> 10) % 600,
                duration_ms: 1_800 + (n >> 20) % 1_200,
                rotation_deg: (n >> 5) % 360,
                color: COLORS[i % COLORS.len()],
            }
        })
        .collect()
}

#[component]
pub fn Confetti(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || active.get()>
            <div class="confetti" aria-hidden="true">
                {confetti_pieces(PIECES)
                    .into_iter()
                    .map(|piece| view! { <span class="confetti-piece" style=piece.style()></span> })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_count_and_bounds() {
        let pieces = confetti_pieces(50);

        assert_eq!(pieces.len(), 50);
        for piece in &pieces {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!(piece.delay_ms < 600);
            assert!((1_800..3_000).contains(&piece.duration_ms));
        }
    }

    #[test]
    fn test_pieces_are_deterministic() {
        assert_eq!(confetti_pieces(10), confetti_pieces(10));
    }

    #[test]
    fn test_colors_cycle() {
        let pieces = confetti_pieces(4);
        assert_eq!(pieces[0].color, "#64ffda");
        assert_eq!(pieces[3].color, "#64ffda");
    }

    #[test]
    fn test_style() {
        let piece = ConfettiPiece {
            left_pct: 12.5,
            delay_ms: 100,
            duration_ms: 2_000,
            rotation_deg: 45,
            color: "#b794f4",
        };
        assert_eq!(
            piece.style(),
            "left: 12.5%; background: #b794f4; animation-delay: 100ms; animation-duration: 2000ms; transform: rotate(45deg);"
        );
    }
}
