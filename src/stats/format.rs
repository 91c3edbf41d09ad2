// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The name of a day of the week, counting from Sunday = 0.
pub fn format_day_name(day: u32) -> &'static str {
    DAY_NAMES.get(day as usize).copied().unwrap_or("Unknown")
}

/// A 12-hour clock label such as `"3:00 PM"`.
pub fn format_time_slot(hour: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:00 {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_names() {
        assert_eq!(format_day_name(0), "Sunday");
        assert_eq!(format_day_name(3), "Wednesday");
        assert_eq!(format_day_name(6), "Saturday");
        assert_eq!(format_day_name(7), "Unknown");
        assert_eq!(format_day_name(u32::MAX), "Unknown");
    }

    #[test]
    fn test_time_slots() {
        assert_eq!(format_time_slot(0), "12:00 AM");
        assert_eq!(format_time_slot(1), "1:00 AM");
        assert_eq!(format_time_slot(11), "11:00 AM");
        assert_eq!(format_time_slot(12), "12:00 PM");
        assert_eq!(format_time_slot(13), "1:00 PM");
        assert_eq!(format_time_slot(23), "11:00 PM");
    }
}
