// SPDX-License-Identifier: MPL-2.0
//! Notification chime played through cpal.
//!
//! A short sine tone with an exponential decay. Each chime opens the default
//! output device on its own thread, so a missing device is reported to the
//! caller while playback itself never blocks the UI.

use super::presenter::AmbientEffects;
use crate::config::{CHIME_DURATION_MS, CHIME_END_GAIN, CHIME_FREQUENCY_HZ, CHIME_START_GAIN};
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::bounded;
use std::f32::consts::TAU;
use std::time::Duration;

const CHIME_DURATION: Duration = Duration::from_millis(CHIME_DURATION_MS);

/// Extra time the stream stays open after the tone so the tail is not cut.
const DRAIN_MARGIN: Duration = Duration::from_millis(50);

/// Gain at `t` seconds into the chime.
fn envelope(t: f32) -> f32 {
    let length = CHIME_DURATION.as_secs_f32();
    if t >= length {
        return 0.0;
    }
    CHIME_START_GAIN * (CHIME_END_GAIN / CHIME_START_GAIN).powf(t / length)
}

/// Mono sample at `index` for a device running at `sample_rate`.
#[allow(clippy::cast_precision_loss)]
fn sample_at(index: u64, sample_rate: u32) -> f32 {
    let t = index as f32 / sample_rate as f32;
    (TAU * CHIME_FREQUENCY_HZ * t).sin() * envelope(t)
}

/// Plays the chime on the default output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chime;

impl Chime {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AmbientEffects for Chime {
    fn chime(&mut self) -> Result<()> {
        let (ready_tx, ready_rx) = bounded::<Result<()>>(1);

        std::thread::spawn(move || {
            let stream = match open_stream() {
                Ok(stream) => stream,
                Err(err) => {
                    let _ = ready_tx.send(Err(err));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));
            std::thread::sleep(CHIME_DURATION + DRAIN_MARGIN);
            drop(stream);
        });

        ready_rx
            .recv()
            .map_err(|_| Error::Audio("Chime thread exited before starting".to_string()))?
    }
}

fn open_stream() -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;
    let supported_config = device
        .default_output_config()
        .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

    let stream = match supported_config.sample_format() {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &supported_config.into())?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &supported_config.into())?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &supported_config.into())?,
        _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
    };

    stream
        .play()
        .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;
    Ok(stream)
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
) -> Result<cpal::Stream> {
    let sample_rate = config.sample_rate.0;
    let channels = usize::from(config.channels.max(1));
    let mut index: u64 = 0;

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let value = T::from_sample(sample_at(index, sample_rate));
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                    index += 1;
                }
            },
            |err| {
                eprintln!("Chime output error: {err}");
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
}
