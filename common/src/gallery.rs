//! ギャラリー表示状態
//!
//! 検索語・ページ・並び順を1つの状態レコードにまとめ、
//! 表示内容はすべてこの状態とカタログから純粋関数で導出する。

use crate::catalog::CatalogEntry;
use crate::pagination::{clamp_page, page_slice, total_pages, PageControls};
use crate::search::{matches_normalized, normalize_query};

/// 画像の配置ディレクトリ（サイトのルートからの相対パス）
pub const EMOTES_DIR: &str = "emotes";

/// 画像ファイルの表示・ダウンロード用URL
pub fn emote_url(file: &str) -> String {
    format!("{}/{}", EMOTES_DIR, file)
}

/// 並び順モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    /// カタログ順（生成時に新しい順で並んでいる）
    #[default]
    Latest,
    /// 古い順（カタログ順の逆）
    Oldest,
    /// ランダム
    Shuffled,
}

impl OrderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMode::Latest => "latest",
            OrderMode::Oldest => "oldest",
            OrderMode::Shuffled => "shuffled",
        }
    }
}

/// Fisher–Yatesでインデックス列をシャッフル
///
/// `random(n)` は `0..n` の値を返すこと。範囲外の値は丸める。
pub fn shuffle_indices(len: usize, random: &mut impl FnMut(usize) -> usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = random(i + 1).min(i);
        order.swap(i, j);
    }
    order
}

/// 並び順モードに応じたインデックス列
pub fn ordering(mode: OrderMode, len: usize, random: &mut impl FnMut(usize) -> usize) -> Vec<usize> {
    match mode {
        OrderMode::Latest => (0..len).collect(),
        OrderMode::Oldest => (0..len).rev().collect(),
        OrderMode::Shuffled => shuffle_indices(len, random),
    }
}

/// ギャラリーの状態レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub query: String,
    /// 現在ページ（1始まり）
    pub page: usize,
    pub mode: OrderMode,
    /// カタログのインデックス列（モード選択時に1度だけ計算）
    order: Vec<usize>,
}

impl GalleryState {
    pub fn new(catalog_len: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            mode: OrderMode::Latest,
            order: (0..catalog_len).collect(),
        }
    }

    /// 並び順を変更（ページは1へ戻る）
    pub fn set_mode(
        &mut self,
        mode: OrderMode,
        catalog_len: usize,
        random: &mut impl FnMut(usize) -> usize,
    ) {
        self.order = ordering(mode, catalog_len, random);
        self.mode = mode;
        self.page = 1;
    }

    /// 検索語を変更（ページは1へ戻る）
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// 並び順適用後、検索で絞り込んだ一覧
    pub fn visible<'a>(&self, catalog: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        let needle = normalize_query(&self.query);
        self.order
            .iter()
            .filter_map(|&i| catalog.get(i))
            .filter(|e| matches_normalized(e, &needle))
            .collect()
    }

    /// 現在ページに表示するエントリ
    pub fn page_items<'a>(&self, catalog: &'a [CatalogEntry], per_page: usize) -> Vec<&'a CatalogEntry> {
        let visible = self.visible(catalog);
        page_slice(&visible, self.page, per_page).to_vec()
    }

    pub fn total_pages(&self, catalog: &[CatalogEntry], per_page: usize) -> usize {
        total_pages(self.visible(catalog).len(), per_page)
    }

    pub fn controls(&self, catalog: &[CatalogEntry], per_page: usize) -> PageControls {
        PageControls::new(self.page, self.total_pages(catalog, per_page))
    }

    /// 画面幅変更などでページ数が変わった後の補正
    pub fn fit(&mut self, catalog: &[CatalogEntry], per_page: usize) {
        self.page = clamp_page(self.page, self.total_pages(catalog, per_page));
    }

    /// 指定ページへ移動。範囲外なら何もしない
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        if page == 0 || page > total || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        self.go_to(self.page + 1, total)
    }

    pub fn previous_page(&mut self, total: usize) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.go_to(self.page - 1, total)
    }
}

/// カタログ全体からランダムに1件選ぶ
pub fn pick_surprise<'a>(
    catalog: &'a [CatalogEntry],
    random: &mut impl FnMut(usize) -> usize,
) -> Option<&'a CatalogEntry> {
    if catalog.is_empty() {
        return None;
    }
    let index = random(catalog.len()).min(catalog.len() - 1);
    catalog.get(index)
}
