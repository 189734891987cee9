use crate::utils::grid::Grid;
use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};

const IMAGE_WIDTH: usize = 25;
const IMAGE_HEIGHT: usize = 6;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2019, day = 8, tags = ["2019"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pixels: Vec<u8> = input
            .trim()
            .bytes()
            .map(|b| {
                b.is_ascii_digit()
                    .then(|| b - b'0')
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad pixel: {}", b as char)))
            })
            .collect::<Result<_, _>>()?;

        if pixels.is_empty() || !pixels.len().is_multiple_of(IMAGE_WIDTH * IMAGE_HEIGHT) {
            return Err(ParseError::InvalidFormat(format!(
                "image data is not whole {}x{} layers",
                IMAGE_WIDTH, IMAGE_HEIGHT
            )));
        }
        Ok(pixels)
    }
}

fn layers(pixels: &[u8], width: usize, height: usize) -> impl Iterator<Item = &[u8]> {
    pixels.chunks(width * height)
}

/// Ones times twos on the layer with the fewest zeroes
fn integrity_check(pixels: &[u8], width: usize, height: usize) -> Option<usize> {
    layers(pixels, width, height)
        .min_by_key(|layer| layer.iter().filter(|&&p| p == 0).count())
        .map(|layer| {
            let ones = layer.iter().filter(|&&p| p == 1).count();
            let twos = layer.iter().filter(|&&p| p == 2).count();
            ones * twos
        })
}

/// Stack the layers; the first non-transparent pixel wins
fn composite(pixels: &[u8], width: usize, height: usize) -> String {
    let flattened = (0..width * height).map(|i| {
        layers(pixels, width, height)
            .map(|layer| layer[i])
            .find(|&p| p < 2)
            .unwrap_or(2)
    });

    Grid::populate(width, height, flattened, |p| match p {
        1 => '▓',
        _ => '░',
    })
    .map(|grid| grid.to_string())
    .unwrap_or_default()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        integrity_check(shared, IMAGE_WIDTH, IMAGE_HEIGHT)
            .map(|check| check.to_string())
            .ok_or_else(|| SolveError::SolveFailed("image has no layers".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(composite(shared, IMAGE_WIDTH, IMAGE_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewest_zero_layer_check() {
        let pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2];
        // Layers of 3x2: first layer has no zeroes, 1 one and 1 two
        assert_eq!(integrity_check(&pixels, 3, 2), Some(1));
    }

    #[test]
    fn layers_stack_front_to_back() {
        let pixels = [0, 2, 2, 2, 1, 1, 2, 2, 2, 2, 1, 2, 0, 0, 0, 0];
        assert_eq!(composite(&pixels, 2, 2), "░▓\n▓░");
    }

    #[test]
    fn ragged_image_is_rejected() {
        assert!(Solver::parse("123").is_err());
        assert!(Solver::parse("12a").is_err());
    }
}
