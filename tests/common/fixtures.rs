use pagenav::InMemoryViewSurface;

/// Section height used by [`standard_page`].
pub const SECTION_HEIGHT: f64 = 1000.0;

/// Menu height used by [`standard_page`].
pub const MENU_HEIGHT: f64 = 60.0;

/// A page with `count` sections, `section1..sectionN`, stacked
/// [`SECTION_HEIGHT`] apart starting just below the menu.
pub fn standard_page(count: usize) -> InMemoryViewSurface {
    (0..count).fold(
        InMemoryViewSurface::new().with_menu_height(MENU_HEIGHT),
        |surface, i| {
            surface.with_section(
                format!("section{}", i + 1),
                format!("Section {}", i + 1),
                MENU_HEIGHT + i as f64 * SECTION_HEIGHT,
            )
        },
    )
}

/// A page whose sections sit at the given viewport offsets with no scroll.
pub fn page_with_offsets(offsets: &[f64]) -> InMemoryViewSurface {
    offsets
        .iter()
        .enumerate()
        .fold(InMemoryViewSurface::new().with_menu_height(MENU_HEIGHT), |surface, (i, top)| {
            surface.with_section(format!("s{}", i + 1), format!("S{}", i + 1), *top)
        })
}
