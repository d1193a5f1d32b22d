/// Uniform pick from `0..bound` using JavaScript's Math.random, 0 when `bound` is 0.
pub(crate) fn js_random_below(bound: u32) -> u32 {
    use js_sys::Math::random;
    if bound == 0 {
        return 0;
    }
    ((f64::from(bound) * random()) as u32).min(bound - 1)
}
