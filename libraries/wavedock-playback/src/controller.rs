//! Page player
//!
//! Coordinates the media elements of every track on a page, the docked
//! player they share and the listen button. At most one track is active
//! (mounted into the docked player) at any time.
//!
//! The controller is driven by three kinds of input:
//! - user actions (`toggle_playback` and the entry points built on it)
//! - media events forwarded by the host (`handle_media_event`)
//! - time (`advance`), which runs seek polling and playhead refreshes
//!
//! All visible effects are queued as [`PlayerEvent`]s; see `drain_events`.

use std::time::Duration;

use tracing::{debug, trace, warn};
use wavedock_core::{format_time, format_time_written_out, PageTrack, Strings, TrackId};
use wavedock_waveform::GradientStops;

use crate::config::PlayerConfig;
use crate::error::{PlaybackError, Result};
use crate::events::{PlaybackIcon, PlayerEvent};
use crate::input::{key_action, Key, KeyAction, KeyTarget};
use crate::media::{MediaElement, MediaEvent};
use crate::store::PreferenceStore;
use crate::task::IntervalTask;
use crate::track::{SeekRequest, Track, TrackState};
use crate::volume::{Volume, VolumeView};

/// Partial seeks only happen when they get at least this much closer
const PARTIAL_SEEK_GRANULARITY: f64 = 1.0;

/// A track switch waiting for the previous track's pause to complete
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSwitch {
    pub from: TrackId,
    pub to: TrackId,
    pub seek_to: Option<f64>,
}

/// Playback controller for all tracks of one page
pub struct PagePlayer<M: MediaElement> {
    tracks: Vec<Track<M>>,
    active: Option<TrackId>,
    preselected: Option<TrackId>,
    pending_switch: Option<PendingSwitch>,
    /// Playhead refresher, owned by the track it refreshes
    playhead: Option<(TrackId, IntervalTask)>,

    volume: Volume,
    store: Box<dyn PreferenceStore>,

    strings: Strings,
    config: PlayerConfig,
    now: Duration,

    pending_events: Vec<PlayerEvent>,
}

impl<M: MediaElement> PagePlayer<M> {
    /// Create a player for the given tracks and start it
    ///
    /// `preselect` is the index resolved from the page query string; the
    /// first track is preselected when it is absent or out of range.
    pub fn new(
        tracks: Vec<(PageTrack, M)>,
        preselect: Option<usize>,
        store: Box<dyn PreferenceStore>,
        strings: Strings,
        config: PlayerConfig,
    ) -> Self {
        let mut player = Self::empty(store, strings, config);
        for (page_track, media) in tracks {
            player.add_track(page_track, media);
        }
        player.start(preselect);
        player
    }

    /// Create a player without tracks
    ///
    /// Add tracks with `add_track`, then call `start`.
    pub fn empty(store: Box<dyn PreferenceStore>, strings: Strings, config: PlayerConfig) -> Self {
        let volume = Volume::load(store.as_ref(), &config.volume_storage_key);

        Self {
            tracks: Vec::new(),
            active: None,
            preselected: None,
            pending_switch: None,
            playhead: None,
            volume,
            store,
            strings,
            config,
            now: Duration::ZERO,
            pending_events: Vec::new(),
        }
    }

    /// Append a track in document order, linking it after the previous one
    pub fn add_track(&mut self, page_track: PageTrack, media: M) -> TrackId {
        let id = TrackId::new(self.tracks.len());
        if let Some(previous) = self.tracks.last_mut() {
            previous.set_next(Some(id));
        }
        self.tracks.push(Track::new(id, page_track, media));
        id
    }

    /// Highlight the preselected track and publish the initial volume
    pub fn start(&mut self, preselect: Option<usize>) {
        let count = self.tracks.len();
        self.preselected = preselect
            .filter(|&index| index < count)
            .or_else(|| (count > 0).then_some(0))
            .map(TrackId::new);

        if let Some(preselected) = self.preselected {
            debug!(track = %preselected, "Preselected track");
            self.set_style(preselected, true, false);
        }

        self.update_volume();
    }

    // ===== State =====

    pub fn tracks(&self) -> &[Track<M>] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track<M>> {
        self.tracks.get(id.index())
    }

    /// Media element of a track, e.g. for the host to update buffering state
    pub fn media_mut(&mut self, id: TrackId) -> Option<&mut M> {
        self.tracks.get_mut(id.index()).map(Track::media_mut)
    }

    pub fn track_state(&self, id: TrackId) -> Option<TrackState> {
        self.track(id)
            .map(|track| track.state(self.active == Some(id)))
    }

    /// Track mounted into the docked player
    pub fn active(&self) -> Option<TrackId> {
        self.active
    }

    /// Track that starts when listening with nothing active
    pub fn preselected(&self) -> Option<TrackId> {
        self.preselected
    }

    pub fn pending_switch(&self) -> Option<PendingSwitch> {
        self.pending_switch
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn volume_view(&self) -> VolumeView {
        VolumeView::new(&self.volume, &self.strings)
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Time of the last `advance`
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Playback Control =====

    /// Toggle playback of a track, optionally seeking to `seek_to` seconds
    ///
    /// - Nothing active: mount the track and start it (after seeking).
    /// - Track is active: abort or redirect a pending seek, resume, pause, or
    ///   jump to the seek position.
    /// - Another track is active: stop and rewind it, then mount this one. If
    ///   the other track is still audible, mounting waits for its pause.
    ///
    /// Seek positions are clamped to the track; non-finite ones are ignored.
    pub fn toggle_playback(&mut self, track: TrackId, seek_to: Option<f64>) -> Result<()> {
        let duration = self.get(track)?.duration();
        let seek_to = seek_to
            .filter(|to| to.is_finite())
            .map(|to| to.min(duration).max(0.0));

        if let Some(preselected) = self.preselected.take() {
            if preselected != track {
                self.set_style(preselected, false, false);
            }
        }

        if let Some(superseded) = self.pending_switch.take() {
            debug!(
                from = %superseded.from,
                to = %superseded.to,
                "Superseding deferred track switch"
            );
        }

        match self.active {
            None => self.mount(track, seek_to),
            Some(active) if active == track => self.toggle_active(track, seek_to),
            Some(active) => self.switch(active, track, seek_to),
        }

        Ok(())
    }

    /// Listen button: active, else preselected, else first track
    pub fn listen(&mut self) -> Result<()> {
        match self.active.or(self.preselected).or_else(|| self.first()) {
            Some(track) => self.toggle_playback(track, None),
            None => Ok(()),
        }
    }

    /// Docked playback button: active, else first track
    pub fn docked_toggle(&mut self) -> Result<()> {
        match self.active.or_else(|| self.first()) {
            Some(track) => self.toggle_playback(track, None),
            None => Ok(()),
        }
    }

    /// Docked next button; no-op without an active track or on the last one
    pub fn next_track(&mut self) -> Result<()> {
        let next = self
            .active
            .and_then(|active| self.tracks[active.index()].next());

        match next {
            Some(next) => self.toggle_playback(next, None),
            None => Ok(()),
        }
    }

    /// Seek relative to the current position
    ///
    /// Backwards stops at the start, forwards stops one second before the end.
    pub fn seek_by(&mut self, track: TrackId, delta: f64) -> Result<()> {
        let current = self.get(track)?.media().current_time();
        let duration = self.get(track)?.duration();

        let to = if delta < 0.0 {
            (current + delta).max(0.0)
        } else {
            (current + delta).min(duration - 1.0).max(0.0)
        };

        self.toggle_playback(track, Some(to))
    }

    /// Seek by `direction` scrub steps
    pub fn scrub(&mut self, track: TrackId, direction: f64) -> Result<()> {
        self.seek_by(track, direction * self.config.scrub_seconds)
    }

    /// Seek to a fraction of the track, e.g. from a click on its waveform
    pub fn seek_to_fraction(&mut self, track: TrackId, fraction: f64) -> Result<()> {
        let duration = self.get(track)?.duration();
        self.toggle_playback(track, Some(fraction.clamp(0.0, 1.0) * duration))
    }

    /// Abort a pending seek, restoring the pre-seek controls
    ///
    /// Does nothing when the track is not seeking.
    pub fn abort_seek(&mut self, track: TrackId) -> Result<()> {
        self.check(track)?;
        self.cancel_seek(track);
        Ok(())
    }

    // ===== Waveform Interaction =====

    /// Show the seek preview up to `fraction` of the waveform
    pub fn hover_waveform(&mut self, track: TrackId, fraction: f64) -> Result<()> {
        self.check(track)?;
        self.emit(PlayerEvent::SeekPreview {
            track,
            stops: Some(GradientStops::at(fraction.clamp(0.0, 1.0))),
        });
        Ok(())
    }

    pub fn leave_waveform(&mut self, track: TrackId) -> Result<()> {
        self.check(track)?;
        self.emit(PlayerEvent::SeekPreview { track, stops: None });
        Ok(())
    }

    /// Announce the position when the waveform input gains focus
    pub fn focus_waveform(&mut self, track: TrackId) -> Result<()> {
        self.check(track)?;
        self.announce_playhead(track);
        Ok(())
    }

    /// Handle a key press
    ///
    /// Returns whether the key was consumed; the host should then suppress
    /// the default browser behavior.
    pub fn handle_key(&mut self, target: KeyTarget, key: Key) -> Result<bool> {
        let Some(action) = key_action(target, key) else {
            return Ok(false);
        };

        match action {
            KeyAction::Scrub { track, direction } => self.scrub(track, direction)?,
            KeyAction::ScrubActive { direction } => match self.active {
                Some(active) => self.scrub(active, direction)?,
                None => return Ok(false),
            },
            KeyAction::Toggle(track) => self.toggle_playback(track, None)?,
            KeyAction::ToggleActive => match self.active {
                Some(active) => self.toggle_playback(active, None)?,
                None => return Ok(false),
            },
            KeyAction::VolumeStep(direction) => {
                self.adjust_volume(direction * self.config.volume_key_step);
            }
        }

        Ok(true)
    }

    // ===== Volume Control =====

    /// Set an absolute level, e.g. from the slider
    pub fn set_volume(&mut self, level: f64) {
        self.volume.set_level(level);
        self.update_volume();
    }

    pub fn adjust_volume(&mut self, delta: f64) {
        self.volume.adjust(delta);
        self.update_volume();
    }

    /// Adjust by a wheel event's vertical delta (scrolling up raises)
    pub fn wheel_volume(&mut self, delta_y: f64) {
        self.adjust_volume(-delta_y * self.config.wheel_sensitivity);
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.update_volume();
    }

    // ===== Media Events =====

    /// Handle an asynchronous event from a track's media element
    pub fn handle_media_event(&mut self, track: TrackId, event: MediaEvent) -> Result<()> {
        self.check(track)?;
        trace!(%track, ?event, "Media event");

        match event {
            MediaEvent::Play => self.on_play(track),
            MediaEvent::Playing => self.emit_icons(track, PlaybackIcon::Pause),
            MediaEvent::Waiting => self.emit_icons(track, PlaybackIcon::Loading),
            MediaEvent::Pause => self.on_pause(track),
            MediaEvent::Ended => return self.on_ended(track),
        }

        Ok(())
    }

    // ===== Scheduling =====

    /// Run every task due at `now`
    pub fn advance(&mut self, now: Duration) {
        self.now = now;

        for index in 0..self.tracks.len() {
            let due = self.tracks[index]
                .seek_mut()
                .is_some_and(|seek| seek.task_mut().fire(now));

            if due {
                self.poll_seek(TrackId::new(index));
            }
        }

        let refresh = match &mut self.playhead {
            Some((track, task)) => task.fire(now).then_some(*track),
            None => None,
        };

        if let Some(track) = refresh {
            self.update_playhead(track, false);
        }
    }

    /// Earliest time at which `advance` has work to do
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tracks
            .iter()
            .filter_map(|track| track.seek().map(|seek| seek.task().next_due()))
            .chain(self.playhead.as_ref().map(|(_, task)| task.next_due()))
            .min()
    }

    // ===== Internal =====

    fn check(&self, track: TrackId) -> Result<()> {
        self.get(track).map(|_| ())
    }

    fn get(&self, track: TrackId) -> Result<&Track<M>> {
        self.tracks
            .get(track.index())
            .ok_or(PlaybackError::UnknownTrack(track))
    }

    fn first(&self) -> Option<TrackId> {
        self.tracks.first().map(Track::id)
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn toggle_active(&mut self, track: TrackId, seek_to: Option<f64>) {
        let index = track.index();

        if self.tracks[index].seek().is_some() {
            match seek_to {
                Some(to) => {
                    debug!(%track, to, "Redirecting pending seek");
                    if let Some(seek) = self.tracks[index].seek_mut() {
                        seek.redirect(to);
                    }
                }
                None => {
                    self.cancel_seek(track);
                }
            }
        } else if self.tracks[index].media().is_paused() {
            if let Some(to) = seek_to {
                self.tracks[index].media_mut().set_current_time(to);
            }
            self.play(track);
        } else if let Some(to) = seek_to {
            self.tracks[index].media_mut().set_current_time(to);
            self.update_playhead(track, false);
            self.announce_playhead(track);
        } else {
            self.tracks[index].media_mut().pause();
        }
    }

    fn switch(&mut self, active: TrackId, track: TrackId, seek_to: Option<f64>) {
        if self.tracks[active.index()].seek().is_some() {
            debug!(from = %active, to = %track, "Aborting seek to switch tracks");
            self.cancel_seek(active);
            self.reset_and_mount(active, track, seek_to);
        } else if self.tracks[active.index()].media().is_paused() {
            self.reset_and_mount(active, track, seek_to);
        } else {
            debug!(from = %active, to = %track, "Deferring track switch until pause completes");
            self.pending_switch = Some(PendingSwitch {
                from: active,
                to: track,
                seek_to,
            });
            self.tracks[active.index()].media_mut().pause();
        }
    }

    /// Rewind the previous track and mount the next one
    fn reset_and_mount(&mut self, previous: TrackId, next: TrackId, seek_to: Option<f64>) {
        self.stop_playhead(previous);
        self.tracks[previous.index()].media_mut().set_current_time(0.0);
        self.update_playhead(previous, true);
        self.announce_playhead(previous);
        self.set_style(previous, false, false);

        self.mount(next, seek_to);
    }

    fn mount(&mut self, track: TrackId, seek_to: Option<f64>) {
        debug!(%track, ?seek_to, "Mounting track");
        self.active = Some(track);

        let mounted = &self.tracks[track.index()];
        let status = self.strings.player_open_playing(mounted.title());
        let docked = PlayerEvent::DockedMounted {
            track,
            title: mounted.title().to_string(),
            artists: mounted.artists().map(str::to_string),
            number: mounted.number().map(str::to_string),
            current_time: format_time(0.0),
            total_time: format_time(mounted.duration()),
            duration: mounted.duration(),
            next_enabled: mounted.next().is_some(),
        };

        self.emit(PlayerEvent::PlayerStatus {
            open: true,
            label: status,
        });
        self.emit(docked);

        let level = self.volume.level();
        self.tracks[track.index()].media_mut().set_volume(level);

        // Loading is shown right away; the Play/Playing events replace it
        self.set_style(track, true, false);
        self.emit_icons(track, PlaybackIcon::Loading);
        self.tracks[track.index()].media_mut().ensure_preloaded();

        match seek_to {
            None => self.play(track),
            Some(to) => {
                let task = IntervalTask::start(self.config.seek_poll_interval(), self.now);
                self.tracks[track.index()].set_seek(Some(SeekRequest::new(to, task)));
            }
        }
    }

    fn play(&mut self, track: TrackId) {
        let level = self.volume.level();
        let media = self.tracks[track.index()].media_mut();
        media.set_volume(level);
        media.play();
    }

    /// Check whether the seek target became seekable
    ///
    /// Ranges are walked in order. A range containing the target commits the
    /// seek. Otherwise the position is moved to the end of the nearest range
    /// before the target, once that gets more than a second closer, to make
    /// the element buffer towards the target. A range ending within a second
    /// of the track duration commits at its end.
    fn poll_seek(&mut self, track: TrackId) {
        let index = track.index();
        let Some(seek) = self.tracks[index].seek() else {
            return;
        };
        let to = seek.target();
        let closest_performed = seek.closest_performed();

        let mut closest_available = 0.0;
        for range in self.tracks[index].media().seekable() {
            if range.start > to {
                break;
            }

            if range.end >= to {
                debug!(%track, to, "Seek target seekable, starting playback");
                self.commit_seek(track, to);
                return;
            }

            closest_available = range.end;
        }

        let end_reachable = self.tracks[index].duration() - PARTIAL_SEEK_GRANULARITY;
        if closest_available > 0.0 && closest_available >= end_reachable {
            debug!(%track, to, closest_available, "Seek target past media end");
            self.commit_seek(track, closest_available);
            return;
        }

        trace!(%track, to, closest_available, "Seek target not yet seekable");

        if closest_available - closest_performed > PARTIAL_SEEK_GRANULARITY {
            let current = &mut self.tracks[index];
            current.media_mut().set_current_time(closest_available);
            if let Some(seek) = current.seek_mut() {
                seek.record_partial(closest_available);
            }
        }
    }

    fn commit_seek(&mut self, track: TrackId, position: f64) {
        let current = &mut self.tracks[track.index()];
        current.media_mut().set_current_time(position);
        current.set_seek(None);
        self.play(track);
    }

    /// Drop a pending seek and restore the play controls
    fn cancel_seek(&mut self, track: TrackId) -> bool {
        if self.tracks[track.index()].set_seek(None).is_none() {
            return false;
        }

        debug!(%track, "Seek aborted");
        self.emit_icons(track, PlaybackIcon::Play);
        let playing = self.tracks[track.index()].is_playing();
        self.set_style(track, false, playing);
        true
    }

    fn on_play(&mut self, track: TrackId) {
        // Stale when the track was paused again or switched away from
        // before the event arrived
        if self.active != Some(track) || self.tracks[track.index()].media().is_paused() {
            trace!(%track, "Ignoring stale play event");
            return;
        }

        self.set_style(track, true, true);
        self.emit_icons(track, PlaybackIcon::Pause);

        self.playhead = Some((
            track,
            IntervalTask::start(self.config.playhead_interval(), self.now),
        ));
        self.update_playhead(track, false);
        self.announce_playhead(track);
    }

    fn on_pause(&mut self, track: TrackId) {
        self.stop_playhead(track);

        let highlighted = self.tracks[track.index()].is_highlighted();
        self.set_style(track, highlighted, false);
        self.emit_icons(track, PlaybackIcon::Play);

        match self.pending_switch {
            Some(pending) if pending.from == track => {
                self.pending_switch = None;
                debug!(from = %pending.from, to = %pending.to, "Running deferred track switch");
                self.reset_and_mount(pending.from, pending.to, pending.seek_to);
            }
            _ => {
                self.update_playhead(track, false);
                self.announce_playhead(track);
            }
        }
    }

    fn on_ended(&mut self, track: TrackId) -> Result<()> {
        self.stop_playhead(track);
        self.tracks[track.index()].media_mut().set_current_time(0.0);
        self.set_style(track, false, false);

        if self.active != Some(track) {
            return Ok(());
        }

        match self.tracks[track.index()].next() {
            Some(next) => {
                debug!(%track, %next, "Track ended, continuing with next track");
                self.toggle_playback(next, None)
            }
            None => {
                debug!(%track, "Last track ended, closing player");
                self.active = None;
                let label = self.strings.player_closed.clone();
                self.emit(PlayerEvent::PlayerStatus { open: false, label });
                Ok(())
            }
        }
    }

    fn stop_playhead(&mut self, track: TrackId) {
        if matches!(self.playhead, Some((owner, _)) if owner == track) {
            self.playhead = None;
        }
    }

    fn set_style(&mut self, track: TrackId, active: bool, playing: bool) {
        self.tracks[track.index()].set_style(active, playing);
        self.emit(PlayerEvent::TrackStyle {
            track,
            active,
            playing,
        });
    }

    fn emit_icons(&mut self, track: TrackId, icon: PlaybackIcon) {
        let listen_label = match icon {
            PlaybackIcon::Play => self.strings.listen.clone(),
            PlaybackIcon::Pause | PlaybackIcon::Loading => self.strings.pause.clone(),
        };

        self.emit(PlayerEvent::Icons {
            track,
            icon,
            docked: self.active == Some(track),
            listen_label,
        });
    }

    fn update_playhead(&mut self, track: TrackId, reset: bool) {
        let current = &self.tracks[track.index()];
        let factor = if reset { 0.0 } else { current.progress() };
        let current_time = current.media().current_time();
        let stops = current.has_waveform().then(|| GradientStops::at(factor));

        self.emit(PlayerEvent::Playhead {
            track,
            docked: self.active == Some(track),
            factor,
            current_time,
            text: format_time(current_time),
            stops,
        });
    }

    fn announce_playhead(&mut self, track: TrackId) {
        let current_time = self.tracks[track.index()].media().current_time();
        let value_text = format!(
            "{} {}",
            self.strings.playback_position,
            format_time_written_out(current_time, &self.strings)
        );

        self.emit(PlayerEvent::PlayheadAnnounced {
            track,
            docked: self.active == Some(track),
            value_text,
        });
    }

    fn update_volume(&mut self) {
        if let Err(e) = self
            .volume
            .persist(self.store.as_mut(), &self.config.volume_storage_key)
        {
            warn!(error = %e, "Failed to persist volume");
        }

        if let Some(active) = self.active {
            let level = self.volume.level();
            self.tracks[active.index()].media_mut().set_volume(level);
        }

        let view = self.volume_view();
        self.emit(PlayerEvent::VolumeChanged { view });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::TimeRange;
    use crate::store::MemoryStore;

    #[derive(Debug)]
    struct StubMedia {
        paused: bool,
        time: f64,
        seekable: Vec<TimeRange>,
    }

    impl StubMedia {
        fn new() -> Self {
            Self {
                paused: true,
                time: 0.0,
                seekable: Vec::new(),
            }
        }
    }

    impl MediaElement for StubMedia {
        fn play(&mut self) {
            self.paused = false;
        }
        fn pause(&mut self) {
            self.paused = true;
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
        fn current_time(&self) -> f64 {
            self.time
        }
        fn set_current_time(&mut self, seconds: f64) {
            self.time = seconds;
        }
        fn seekable(&self) -> Vec<TimeRange> {
            self.seekable.clone()
        }
        fn set_volume(&mut self, _level: f64) {}
        fn ensure_preloaded(&mut self) {}
    }

    fn player(count: usize) -> PagePlayer<StubMedia> {
        let tracks = (0..count)
            .map(|i| (PageTrack::new(format!("Track {}", i + 1), 120.0), StubMedia::new()))
            .collect();
        PagePlayer::new(
            tracks,
            None,
            Box::new(MemoryStore::new()),
            Strings::default(),
            PlayerConfig::default(),
        )
    }

    #[test]
    fn tracks_are_linked_in_order() {
        let player = player(3);
        assert_eq!(player.tracks()[0].next(), Some(TrackId::new(1)));
        assert_eq!(player.tracks()[2].next(), None);
    }

    #[test]
    fn first_track_is_preselected_by_default() {
        let player = player(2);
        assert_eq!(player.preselected(), Some(TrackId::new(0)));
        assert!(player.tracks()[0].is_highlighted());
    }

    #[test]
    fn out_of_range_preselection_falls_back_to_first() {
        let mut player = PagePlayer::<StubMedia>::empty(
            Box::new(MemoryStore::new()),
            Strings::default(),
            PlayerConfig::default(),
        );
        player.add_track(PageTrack::new("a", 1.0), StubMedia::new());
        player.start(Some(4));
        assert_eq!(player.preselected(), Some(TrackId::new(0)));
    }

    #[test]
    fn unknown_track_is_rejected() {
        let mut player = player(1);
        assert!(matches!(
            player.toggle_playback(TrackId::new(5), None),
            Err(PlaybackError::UnknownTrack(_))
        ));
    }

    #[test]
    fn empty_page_ignores_listen() {
        let mut player = player(0);
        player.listen().unwrap();
        player.docked_toggle().unwrap();
        assert_eq!(player.active(), None);
    }

    #[test]
    fn next_deadline_tracks_seek_polls() {
        let mut player = player(1);
        assert_eq!(player.next_deadline(), None);
        player.toggle_playback(TrackId::new(0), Some(30.0)).unwrap();
        assert_eq!(player.next_deadline(), Some(Duration::from_millis(30)));
    }
}
