use crate::entities::movie;

/// Rank for the movie at `index` of `total` movies sorted by ascending rating.
///
/// The best-rated movie ends up first (rank 1), the worst at `total`.
pub fn rank_for(index: usize, total: usize) -> i32 {
    i32::try_from(total - index).unwrap_or(i32::MAX)
}

/// Assigns rankings in place. `movies` must already be ordered by ascending
/// rating; ties keep their existing order.
pub fn assign(movies: &mut [movie::Model]) {
    let total = movies.len();
    for (index, movie) in movies.iter_mut().enumerate() {
        movie.ranking = Some(rank_for(index, total));
    }
}
