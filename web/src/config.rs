/// Id of the `<script type="application/json">` element holding the seed.
pub const SEED_ELEMENT_ID: &str = "answer-seed";

/// Delay before scrolling to the newest card, gives layout a chance to settle.
pub const SCROLL_DELAY_MS: u32 = 25;
