use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::events::{EventSink, TableEvent};
use crate::game::Street;
use crate::player::PlayerAction;

/// One action in a hand's history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    pub street: Street,
    pub action: PlayerAction,
}

/// A finished hand as written to the JSONL history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `YYYYMMDD-NNNNNN`
    pub hand_id: String,
    /// Deck seed of the session, when one was fixed
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Human-readable outcome
    pub result: Option<String>,
    /// RFC3339, filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Writes one [`HandRecord`] per line. As an [`EventSink`] it assembles the
/// record from the engine's events and writes it when the hand resolves.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
    seed: Option<u64>,
    pending: Vec<ActionRecord>,
    current_hand: Option<(u64, u64)>,
    written: Vec<HandRecord>,
    keep_records: bool,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self::with_writer(
            Some(BufWriter::new(f)),
            Utc::now().format("%Y%m%d").to_string(),
        ))
    }

    /// A logger that writes nowhere and keeps records in memory.
    pub fn with_seq_for_test(date: &str) -> Self {
        let mut logger = Self::with_writer(None, date.to_string());
        logger.keep_records = true;
        logger
    }

    fn with_writer(writer: Option<BufWriter<File>>, date: String) -> Self {
        Self {
            writer,
            date,
            seq: 0,
            seed: None,
            pending: Vec::new(),
            current_hand: None,
            written: Vec::new(),
            keep_records: false,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Records kept by an in-memory logger.
    pub fn records(&self) -> &[HandRecord] {
        &self.written
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        if self.keep_records {
            self.written.push(rec);
        }
        Ok(())
    }
}

impl EventSink for HandLogger {
    fn on_event(&mut self, event: &TableEvent) {
        match event {
            TableEvent::HandStarted {
                game_number,
                hand_number,
                ..
            } => {
                self.pending.clear();
                self.current_hand = Some((*game_number, *hand_number));
            }
            TableEvent::ActionTaken {
                player,
                street,
                action,
                ..
            } => self.pending.push(ActionRecord {
                player: player.clone(),
                street: *street,
                action: *action,
            }),
            TableEvent::HandResolved {
                winners,
                payouts,
                pot,
                win_type,
                board,
                ..
            } => {
                let (game, hand) = self.current_hand.take().unwrap_or_default();
                let verb = if winners.len() > 1 { "split" } else { "won" };
                let record = HandRecord {
                    hand_id: self.next_id(),
                    seed: self.seed,
                    actions: std::mem::take(&mut self.pending),
                    board: board.clone(),
                    result: Some(format!("{} {} {}", winners.join(", "), verb, pot)),
                    ts: None,
                    meta: Some(serde_json::json!({
                        "game_number": game,
                        "hand_number": hand,
                        "pot": pot,
                        "win_type": win_type,
                        "payouts": payouts,
                    })),
                    showdown: Some(ShowdownInfo {
                        winners: winners.clone(),
                        notes: (winners.len() > 1).then(|| "split pot".to_string()),
                    }),
                };
                if let Err(e) = self.write(&record) {
                    tracing::warn!(error = %e, hand_id = %record.hand_id, "failed to write hand record");
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WinType;
    use crate::pot::Payout;

    #[test]
    fn hand_ids_are_sequential() {
        let mut logger = HandLogger::with_seq_for_test("20260101");
        assert_eq!(logger.next_id(), "20260101-000001");
        assert_eq!(logger.next_id(), "20260101-000002");
    }

    #[test]
    fn events_build_a_record() {
        let mut logger = HandLogger::with_seq_for_test("20260101").with_seed(Some(9));
        logger.on_event(&TableEvent::HandStarted {
            game_number: 1,
            hand_number: 4,
            dealer: 0,
            small_blind: 0,
            big_blind: 1,
        });
        logger.on_event(&TableEvent::ActionTaken {
            seat: 0,
            player: "alice".into(),
            street: Street::PreFlop,
            action: PlayerAction::Fold,
            amount: 0,
        });
        logger.on_event(&TableEvent::HandResolved {
            hand_number: 4,
            winners: vec!["bob".into()],
            payouts: vec![Payout { seat: 1, amount: 75 }],
            pot: 75,
            win_type: WinType::Fold,
            board: vec![],
        });
        let recs = logger.records();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].hand_id, "20260101-000001");
        assert_eq!(recs[0].seed, Some(9));
        assert_eq!(recs[0].actions.len(), 1);
        assert_eq!(recs[0].result.as_deref(), Some("bob won 75"));
        assert!(recs[0].ts.is_some());
        let meta = recs[0].meta.as_ref().unwrap();
        assert_eq!(meta["hand_number"], 4);
        assert_eq!(meta["win_type"], "fold");
    }
}
