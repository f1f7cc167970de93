pub const PALETTE: [&str; 10] = [
    "#FF4500", "#1E90FF", "#32CD32", "#FFD700", "#9400D3", "#00CED1", "#FF69B4", "#8B4513",
    "#696969", "#7CFC00",
];

/// Colour for the n-th satellite; wraps every ten entries.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
