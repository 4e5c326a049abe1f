use crate::domain::model::Player;
use crate::utils::error::Result;

/// 球員名單的持久化介面
pub trait RosterStore {
    /// 讀取整份名單。檔案不存在時回傳空名單
    fn load(&self) -> Result<Vec<Player>>;
    /// 以目前順序覆寫整份名單
    fn save(&self, players: &[Player]) -> Result<()>;
}

pub trait ConfigProvider {
    fn roster_path(&self) -> &str;
    fn log_filter(&self) -> Option<&str>;
}

impl<T: RosterStore + ?Sized> RosterStore for &T {
    fn load(&self) -> Result<Vec<Player>> {
        (**self).load()
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        (**self).save(players)
    }
}
