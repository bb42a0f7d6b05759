cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        /// Maps `f` over `items` and their indices on the rayon pool.
        /// The output keeps the input order.
        pub fn opt_map_indexed<T, R, F>(items: &[T], f: F) -> Vec<R>
        where
            T: Sync,
            R: Send,
            F: Fn(usize, &T) -> R + Sync + Send,
        {
            items.par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        }

    } else {
        pub fn opt_map_indexed<T, R, F>(items: &[T], f: F) -> Vec<R>
        where
            F: Fn(usize, &T) -> R,
        {
            items.iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        }
    }
}
