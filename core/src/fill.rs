use alloc::string::ToString;
use alloc::vec::Vec;
use futures_util::future::try_join_all;

use crate::*;

/// Runs one fill cycle: a single id listing, then every category in parallel.
///
/// The first failing category fetch fails the whole cycle and whatever the
/// other fetches returned is dropped. A listing shorter than the board, or a
/// category with the wrong number of clues, is [`NetworkError::Incomplete`].
pub async fn fetch_board<S: TriviaSource>(
    source: &S,
    config: &BoardConfig,
) -> core::result::Result<Board, NetworkError> {
    let ids = source.category_ids(config.categories).await?;
    log::debug!("category ids: {:?}", ids);

    let expected = usize::from(config.categories);
    if ids.len() < expected {
        return Err(NetworkError::Incomplete {
            expected,
            actual: ids.len(),
        });
    }

    let categories: Vec<Category> = try_join_all(
        ids.into_iter()
            .take(expected)
            .map(|id| source.category(id, config.clues_per_category)),
    )
    .await?;

    let clue_count = usize::from(config.clues_per_category);
    if let Some(short) = categories
        .iter()
        .find(|category| category.clues.len() != clue_count)
    {
        log::warn!("category {:?} has {} clues", short.title, short.clues.len());
        return Err(NetworkError::Incomplete {
            expected: clue_count,
            actual: short.clues.len(),
        });
    }

    Board::from_categories(config, categories).map_err(|err| NetworkError::Decode(err.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::board::tests::sample_category;
    use alloc::format;
    use core::cell::{Cell, RefCell};
    use core::future::{Future, ready};
    use futures_util::FutureExt;

    /// Serves canned categories from ready futures.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub ids: Vec<CategoryId>,
        pub failing_ids: Vec<CategoryId>,
        pub fail_listing: bool,
        pub short_ids: Vec<CategoryId>,
        pub fetched: RefCell<Vec<CategoryId>>,
        pub listing_calls: Cell<u32>,
    }

    impl FakeSource {
        pub(crate) fn with_ids(ids: impl IntoIterator<Item = CategoryId>) -> Self {
            Self {
                ids: ids.into_iter().collect(),
                ..Default::default()
            }
        }
    }

    impl TriviaSource for FakeSource {
        fn category_ids(
            &self,
            count: Coord,
        ) -> impl Future<Output = core::result::Result<Vec<CategoryId>, NetworkError>> {
            self.listing_calls.set(self.listing_calls.get() + 1);
            if self.fail_listing {
                return ready(Err(NetworkError::Transport("connection refused".into())));
            }
            ready(Ok(self.ids.iter().copied().take(count.into()).collect()))
        }

        fn category(
            &self,
            id: CategoryId,
            clue_count: Coord,
        ) -> impl Future<Output = core::result::Result<Category, NetworkError>> {
            self.fetched.borrow_mut().push(id);
            if self.failing_ids.contains(&id) {
                return ready(Err(NetworkError::Status(500)));
            }
            let clue_count = if self.short_ids.contains(&id) {
                clue_count - 1
            } else {
                clue_count
            };
            let mut category = sample_category(id as Coord, clue_count);
            category.title = format!("category {id}");
            ready(Ok(category))
        }
    }

    fn run(source: &FakeSource) -> core::result::Result<Board, NetworkError> {
        fetch_board(source, &BoardConfig::default())
            .now_or_never()
            .expect("fake source resolves immediately")
    }

    #[test]
    fn successful_fill_builds_full_hidden_board() {
        let source = FakeSource::with_ids(10..16);

        let board = run(&source).unwrap();

        assert_eq!(board.size(), (5, 6));
        assert_eq!(board.titles()[0], "category 10");
        assert_eq!(board.titles()[5], "category 15");
        assert_eq!(board.iter_clues().count(), 30);
        assert!(board.iter_clues().all(|clue| clue.showing == Showing::Hidden));
        assert_eq!(*source.fetched.borrow(), [10u64, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn listing_failure_skips_category_fetches() {
        let source = FakeSource {
            fail_listing: true,
            ..FakeSource::with_ids(0..6)
        };

        assert!(matches!(run(&source), Err(NetworkError::Transport(_))));
        assert!(source.fetched.borrow().is_empty());
    }

    #[test]
    fn one_failed_category_fails_the_whole_fill() {
        let source = FakeSource {
            failing_ids: alloc::vec![3],
            ..FakeSource::with_ids(0..6)
        };

        assert_eq!(run(&source).err(), Some(NetworkError::Status(500)));
    }

    #[test]
    fn short_listing_is_incomplete() {
        let source = FakeSource::with_ids(0..4);

        assert_eq!(
            run(&source).err(),
            Some(NetworkError::Incomplete {
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn short_category_is_incomplete() {
        let source = FakeSource {
            short_ids: alloc::vec![2],
            ..FakeSource::with_ids(0..6)
        };

        assert_eq!(
            run(&source).err(),
            Some(NetworkError::Incomplete {
                expected: 5,
                actual: 4
            })
        );
    }
}
