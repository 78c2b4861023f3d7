//! ページング計算
//!
//! 1ページあたりの件数はビューポート幅のみで決まる（ブレークポイント表）。
//! ページ番号は1始まり。

/// (最大幅, 1ページの件数)。幅は上限を含む。
pub const BREAKPOINTS: &[(u32, usize)] = &[
    (650, 114),  // 3列 × 38行
    (900, 152),  // 4列 × 38行
    (1200, 180), // 6列 × 30行
    (1919, 256), // 8列 × 32行
    (2559, 300), // 10列 × 30行
];

/// 最大ブレークポイントを超える幅の件数（14列 × 30行）
pub const WIDEST_PAGE_SIZE: usize = 420;

/// ビューポート幅から1ページの件数を決定
pub fn items_per_page(viewport_width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(max_width, _)| viewport_width <= *max_width)
        .map(|(_, size)| *size)
        .unwrap_or(WIDEST_PAGE_SIZE)
}

/// 総ページ数
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    item_count.div_ceil(per_page)
}

/// ページ数の変化後に現在ページを補正（範囲外なら1へ戻す）
pub fn clamp_page(current: usize, total: usize) -> usize {
    if current == 0 || (total > 0 && current > total) {
        1
    } else {
        current
    }
}

/// 指定ページの範囲を切り出す
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// ページ送りボタンの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageControls {
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            has_previous: current > 1,
            has_next: current < total,
        }
    }

    /// 表示するページ番号（1..=total）
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total
    }
}
