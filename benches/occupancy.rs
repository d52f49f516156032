#![feature(test)]

extern crate test;

#[cfg(test)]
mod tests {
    use snake_occupancy::queries::{bench::make_state, BoardOccupancy, CellQuery};
    use test::Bencher;

    #[bench]
    fn bench_is_snake_miss(b: &mut Bencher) {
        let state = make_state(400, 20, 25);
        let view = BoardOccupancy::from(&state);

        // a miss scans the whole body
        b.iter(|| view.is_snake(-1, -1));
    }

    #[bench]
    fn bench_is_food(b: &mut Bencher) {
        let state = make_state(400, 20, 25);
        let view = BoardOccupancy::from(&state);

        b.iter(|| view.is_food(-1, -1));
    }
}
