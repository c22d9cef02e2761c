//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use criterion::{Criterion, black_box};
use uniarray::{Array, Sequence};

const LENGTH: usize = 1 << 16;

fn total<'a>(values: impl Iterator<Item = &'a u32>) -> u64 {
    values.map(|&v| u64::from(v)).sum()
}

fn values() -> Array<u32> {
    Array::from_fn(LENGTH, |i| i as u32).unwrap()
}

pub fn bench_contiguous_sum(c: &mut Criterion) {
    let array = values();
    c.bench_function("sum plain slice", |b| {
        b.iter(|| total(black_box(array.as_slice()).iter()));
    });
    c.bench_function("sum contiguous view", |b| {
        b.iter(|| total(black_box(array.as_view()).iter()));
    });
    c.bench_function("sum owning array", |b| b.iter(|| total(black_box(&array).iter())));
}

pub fn bench_slice_sum(c: &mut Criterion) {
    let array = values();
    c.bench_function("sum slice of view", |b| {
        b.iter(|| total(black_box(array.as_view()).slice(LENGTH / 4, LENGTH / 2).iter()));
    });
}

pub fn bench_stride_sum(c: &mut Criterion) {
    let array = values();
    c.bench_function("sum every fourth element", |b| {
        b.iter(|| total(black_box(array.as_view()).stride(4).iter()));
    });
}
