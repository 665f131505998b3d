//! Shared Tailwind class constants to keep cards, tables and forms consistent
//! across routes.

pub struct Theme;

impl Theme {
    /// Page heading.
    pub const TITLE: &'static str = "text-xl font-semibold text-gray-100";

    /// Secondary copy under a heading.
    pub const SUBTITLE: &'static str = "mt-1 text-sm text-gray-400";

    /// Section heading inside a page.
    pub const SECTION_TITLE: &'static str = "text-base font-semibold text-gray-100 mb-2";

    /// Dark card used for resources, AWS roles and tables.
    pub const CARD: &'static str = "rounded-xl border border-slate-800 bg-slate-950 p-4 text-sm";

    /// Responsive card grid.
    pub const CARD_GRID: &'static str = "grid gap-4 grid-cols-[repeat(auto-fill,minmax(260px,1fr))]";

    pub const TABLE: &'static str = "min-w-full text-sm border-collapse";

    pub const TABLE_HEAD: &'static str = "px-3 py-2 text-left text-xs font-medium uppercase tracking-wider text-gray-400";

    pub const TABLE_CELL: &'static str = "px-3 py-2 border-t border-slate-800";

    /// Muted placeholder text for empty and loading states.
    pub const MUTED: &'static str = "text-sm text-gray-400";

    pub const INPUT: &'static str = "block w-full rounded-lg border border-slate-700 bg-slate-900 px-3 py-2 text-sm text-gray-100 placeholder-gray-500 focus:border-sky-400 focus:ring-2 focus:ring-sky-400/30";

    pub const LABEL: &'static str = "block mb-1 text-xs font-medium text-gray-300";
}
