use anyhow::bail;

use crate::generator::{AmbientContext, ShapeGenerator};
use crate::shape::{Shape, BASE_SHAPE_COUNT, SHAPE_COUNT_SPREAD};
use crate::svg;

/// One collectible. Minting is the only way to obtain a Token and there are
/// no mutating methods, so the shape collection is fixed for the token's
/// lifetime and every art query reads the same state.
pub struct Token {
    token_id: u32,
    shapes: Vec<Shape>,
}

impl Token {
    /// Runs the generator exactly once and validates the result. A token
    /// whose collection violates the bounds never comes into existence.
    pub fn mint(token_id: u32, seed: u64, ctx: AmbientContext) -> anyhow::Result<Token> {
        let shapes = ShapeGenerator::new(seed, ctx).generate();

        let min = BASE_SHAPE_COUNT as usize;
        let max = (BASE_SHAPE_COUNT + SHAPE_COUNT_SPREAD - 1) as usize;
        if shapes.len() < min || shapes.len() > max {
            bail!("shape count out of range: {}", shapes.len());
        }
        for shape in &shapes {
            if !shape.in_bounds() {
                bail!("shape out of bounds: {shape:?}");
            }
        }

        Ok(Token { token_id, shapes })
    }

    pub fn token_id(&self) -> u32 {
        self.token_id
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Serializes the stored collection. Read-only, so any number of
    /// concurrent callers may share the token behind an Arc.
    pub fn art(&self) -> String {
        svg::render(&self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_ctx() -> AmbientContext {
        AmbientContext {
            timestamp: 1_700_000_000,
            minter_id: 42,
        }
    }

    #[test]
    fn minting_succeeds_for_arbitrary_seeds() {
        for seed in [0, 1, 7, u64::MAX] {
            let token = Token::mint(0, seed, fixed_ctx()).unwrap();
            assert!(!token.shapes().is_empty());
        }
    }

    #[test]
    fn art_is_stable_across_queries() {
        let token = Token::mint(0, 3, fixed_ctx()).unwrap();
        assert_eq!(token.art(), token.art());
    }

    #[test]
    fn minted_token_keeps_its_id() {
        let token = Token::mint(5, 0, fixed_ctx()).unwrap();
        assert_eq!(token.token_id(), 5);
    }
}
