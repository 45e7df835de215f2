use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::domain::models::{AnimeEntry, SearchField};
use crate::domain::validate::{parse_episode_count, parse_rating};
use crate::infra::prompt::{InputClosed, Prompt};
use crate::infra::store::RecordStore;
use crate::presentation::table::render_table;
use crate::workflows::inventory::{self, EntryUpdate};

const NO_ENTRIES: &str = "\n📢 Tidak ada anime tersedia.\n";
const LIST_HEADING: &str = "\n📜 Daftar Anime:\n";
const INVALID_EPISODES: &str = "⚠ Jumlah episode harus berupa angka! Coba lagi.";
const INVALID_RATING: &str = "⚠ Rating harus antara 1 - 10! Coba lagi.";
const INVALID_POSITION: &str = "⚠ Nomor anime tidak valid!";
const FAREWELL: &str = "👋 Terima kasih telah menggunakan sistem ini!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Continue,
    Exit,
}

/// Interactive inventory session: shows the main menu, runs the chosen
/// operation against the store, and comes back until the user leaves.
pub struct Menu<S, P, W> {
    store: S,
    prompt: P,
    out: W,
}

impl<S: RecordStore, P: Prompt, W: Write> Menu<S, P, W> {
    pub fn new(store: S, prompt: P, out: W) -> Self {
        Self { store, prompt, out }
    }

    /// Runs until the user picks anything other than "1".."5" or input ends.
    /// Save failures are returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.main_menu() {
                Ok(MenuAction::Continue) => {}
                Ok(MenuAction::Exit) => break,
                Err(e) if e.is::<InputClosed>() => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.out, "{FAREWELL}")?;
        self.out.flush()?;
        Ok(())
    }

    fn main_menu(&mut self) -> Result<MenuAction> {
        writeln!(self.out, "\n📌 Pilih aksi:")?;
        writeln!(self.out, "1️⃣  Lihat daftar anime")?;
        writeln!(self.out, "2️⃣  Tambah anime baru")?;
        writeln!(self.out, "3️⃣  Perbarui anime")?;
        writeln!(self.out, "4️⃣  Hapus anime")?;
        writeln!(self.out, "5️⃣  Cari anime")?;
        writeln!(self.out, "6️⃣  Keluar")?;

        match self.ask("Masukkan nomor: ")?.as_str() {
            "1" => self.show_items()?,
            "2" => self.add_item()?,
            "3" => self.update_item()?,
            "4" => self.delete_item()?,
            "5" => self.search_item()?,
            _ => return Ok(MenuAction::Exit),
        }
        Ok(MenuAction::Continue)
    }

    pub fn show_items(&mut self) -> Result<()> {
        let entries = self.store.load();
        self.print_entries(&entries)?;
        Ok(())
    }

    pub fn add_item(&mut self) -> Result<()> {
        let title = self.ask("Masukkan judul anime: ")?;
        let genre = self.ask("Masukkan genre anime: ")?;

        let episodes = loop {
            match parse_episode_count(&self.ask("Masukkan jumlah episode: ")?) {
                Ok(episodes) => break episodes,
                Err(e) => {
                    debug!("{e}");
                    writeln!(self.out, "{INVALID_EPISODES}")?;
                }
            }
        };

        let rating = loop {
            match parse_rating(&self.ask("Masukkan rating anime (1-10): ")?) {
                Ok(rating) => break rating,
                Err(e) => {
                    debug!("{e}");
                    writeln!(self.out, "{INVALID_RATING}")?;
                }
            }
        };

        let entry = AnimeEntry::new(title.trim(), genre.trim(), &episodes, rating);
        let entries = inventory::add(self.store.load(), entry);
        self.store.save(&entries)?;
        writeln!(self.out, "✅ Anime berhasil ditambahkan!")?;
        Ok(())
    }

    pub fn update_item(&mut self) -> Result<()> {
        let entries = self.store.load();
        if !self.print_entries(&entries)? {
            return Ok(());
        }

        let answer = self.ask("Masukkan nomor anime yang ingin diperbarui: ")?;
        let Some(index) = inventory::resolve_position(&answer, entries.len()) else {
            writeln!(self.out, "{INVALID_POSITION}")?;
            return Ok(());
        };
        writeln!(self.out, "✏️  Memperbarui: {}", entries[index].title)?;

        let title = self.ask("Masukkan judul baru (kosongkan untuk tidak mengubah): ")?;
        let genre = self.ask("Masukkan genre baru (kosongkan untuk tidak mengubah): ")?;

        let episodes = loop {
            let answer = self.ask("Masukkan jumlah episode baru (kosongkan untuk tidak mengubah): ")?;
            if answer.trim().is_empty() {
                break None;
            }
            match parse_episode_count(&answer) {
                Ok(episodes) => break Some(episodes),
                Err(e) => {
                    debug!("{e}");
                    writeln!(self.out, "{INVALID_EPISODES}")?;
                }
            }
        };

        let rating = loop {
            let answer = self.ask("Masukkan rating baru (kosongkan untuk tidak mengubah): ")?;
            if answer.trim().is_empty() {
                break None;
            }
            match parse_rating(&answer) {
                Ok(rating) => break Some(rating),
                Err(e) => {
                    debug!("{e}");
                    writeln!(self.out, "{INVALID_RATING}")?;
                }
            }
        };

        let changes = EntryUpdate {
            title: non_blank(&title),
            genre: non_blank(&genre),
            episodes,
            rating,
        };
        let entries = inventory::update(entries, index, changes);
        self.store.save(&entries)?;
        writeln!(self.out, "✅ Data anime berhasil diperbarui!")?;
        Ok(())
    }

    pub fn delete_item(&mut self) -> Result<()> {
        let entries = self.store.load();
        if !self.print_entries(&entries)? {
            return Ok(());
        }

        let answer = self.ask("Masukkan nomor anime yang ingin dihapus: ")?;
        let Some(index) = inventory::resolve_position(&answer, entries.len()) else {
            writeln!(self.out, "{INVALID_POSITION}")?;
            return Ok(());
        };
        writeln!(self.out, "🗑 Menghapus: {}", entries[index].title)?;

        let (entries, _) = inventory::delete(entries, index);
        self.store.save(&entries)?;
        writeln!(self.out, "✅ Anime berhasil dihapus!")?;
        Ok(())
    }

    pub fn search_item(&mut self) -> Result<()> {
        let field = loop {
            writeln!(self.out, "\n🔍 Cari anime berdasarkan:")?;
            writeln!(self.out, "1️⃣  Judul")?;
            writeln!(self.out, "2️⃣  Genre")?;
            writeln!(self.out, "3️⃣  Episode")?;
            writeln!(self.out, "4️⃣  Rating")?;

            match SearchField::from_choice(&self.ask("Masukkan nomor pencarian: ")?) {
                Some(field) => break field,
                None => writeln!(self.out, "⚠ Opsi tidak valid! Coba lagi.")?,
            }
        };

        let keyword = self.ask("Masukkan kata kunci: ")?;
        let results = inventory::search(&self.store.load(), field, &keyword);

        if results.is_empty() {
            writeln!(self.out, "\n🔍 Anime tidak ditemukan.")?;
        } else {
            writeln!(self.out, "\n📜 Hasil Pencarian:")?;
            writeln!(self.out, "{}", render_table(&results))?;
        }
        Ok(())
    }

    /// Prints the table, or the empty notice. Returns whether anything was listed.
    fn print_entries(&mut self, entries: &[AnimeEntry]) -> Result<bool> {
        if entries.is_empty() {
            writeln!(self.out, "{NO_ENTRIES}")?;
            return Ok(false);
        }
        writeln!(self.out, "{LIST_HEADING}")?;
        writeln!(self.out, "{}", render_table(entries))?;
        Ok(true)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.out.flush()?;
        self.prompt.ask(question)
    }
}

fn non_blank(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
