// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::record::{AttrValue, DataObject, Dataset};

pub(crate) fn city_object(index: u32, city: &str) -> DataObject {
    let mut object = DataObject::new(index);
    object.set_attr("city", AttrValue::text(city));
    object
}

pub(crate) fn city_dataset(entries: &[(u32, &str)]) -> Dataset {
    let mut dataset = Dataset::new();
    for (index, city) in entries {
        dataset.push(city_object(*index, city));
    }
    dataset
}
