/// Test context with only the given entity tables.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Role)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;
            $(setup.with_table($entity).await?;)+

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Test context with every application table and the seeded roles,
/// plus any extra entity tables given.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_user_tables().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_user_tables().await?;
            $(setup.with_table($entity).await?;)+

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
